pub mod enquiries;

pub mod enquiry;

pub use enquiry::{Enquiry, EnquiryStatus, SubmitEnquiryRequest, SubmitEnquiryResponse};

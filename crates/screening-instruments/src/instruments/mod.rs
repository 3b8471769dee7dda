pub mod cdr;
pub mod faq;
pub mod gds;
pub mod npi;

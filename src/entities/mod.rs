// Entity Models
//
// The only business entity on the landing page: the portfolio company.
// Companies are immutable records built once at load time; everything else
// in the crate is presentation state derived from them.

pub mod company;

pub use company::{Company, CompanyRegistry};

mod mail;

pub use mail::MailDetails;

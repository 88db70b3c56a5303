pub mod use_cases;

pub use use_cases::submission::{Submission, SubmissionOutcome, SubmissionUseCase, UploadedFile};

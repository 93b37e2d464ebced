//! Survey handlers - the respondent-facing pipeline.

mod begin_session;
mod get_session;
mod record_answer;
mod submit_session;

pub use begin_session::{BeginSessionCommand, BeginSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use record_answer::{AnswerAt, RecordAnswerCommand, RecordAnswerHandler, RecordAnswersCommand};
pub use submit_session::{SubmitSessionCommand, SubmitSessionHandler, SubmitSessionResult};

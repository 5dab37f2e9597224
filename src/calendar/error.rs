#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    #[error("Timestamp left the representable range after {steps} day steps.")]
    OutOfRange { steps: u64 },

    #[error("Weekend mask covers every day of the week.")]
    NoBusinessDays,
}

pub type Result<T> = std::result::Result<T, CalendarError>;

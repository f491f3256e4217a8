mod command;
mod invoker;

pub use {
    command::{FRAMERATE_LIMIT_PROPERTY, GLOBAL_LIMIT_SET, LimiterCommand, PROPERTY_SET},
    invoker::{CapturedOutput, LimiterInvoker, ProcessLimiter},
};

mod activity_log;
mod limiter;
mod settings;
mod store;

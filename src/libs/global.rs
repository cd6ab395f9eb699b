use chrono::{DateTime, Utc};
use std::backtrace::Backtrace;

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn log_result<T, E>(result: Result<T, E>)
where
    E: std::fmt::Display,
{
    match result {
        Result::Ok(_) => {}
        Err(e) => {
            let backtrace = Backtrace::capture();
            log::error!("rust_result_error: {} {:?}", e, backtrace);
        }
    }
}

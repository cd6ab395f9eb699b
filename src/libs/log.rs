use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use std::str::FromStr;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} - {t} - {l} - {m}{n}";

pub fn init_log(level: &str) -> anyhow::Result<()> {
    let level = LevelFilter::from_str(level).map_err(|e| anyhow::anyhow!("invalid log level {:?}: {}", level, e))?;

    let stdout = ConsoleAppender::builder().encoder(Box::new(PatternEncoder::new(LOG_PATTERN))).build();

    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .logger(log4rs::config::Logger::builder().build("sqlx", LevelFilter::Warn))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

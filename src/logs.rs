use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

pub fn init_logger() {
    let stderr_level = LevelFilter::Info;
    let file_level = LevelFilter::Debug;

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(stderr_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    // The rolling file sink is only attached when both env vars are set;
    // without them the service logs to stderr alone.
    if let (Ok(file_path), Ok(archive_pattern)) = (
        std::env::var("LOG_FILE_PATH"),
        std::env::var("LOG_ARCHIVE_PATTERN"),
    ) {
        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller = FixedWindowRoller::builder()
            .build(&archive_pattern, LOG_FILE_COUNT)
            .expect("LOG_ARCHIVE_PATTERN must be a valid roller pattern");
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}\n",
            )))
            .build(file_path, Box::new(policy))
            .expect("Failed to open log file");

        config_builder = config_builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder
        .build(root_builder.build(LevelFilter::Trace))
        .expect("Failed to build logger config");

    let _handle = log4rs::init_config(config).expect("Failed to initialize logger");
}

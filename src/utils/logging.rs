use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, fmt};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use chrono::Utc;
use chrono_tz::America::Sao_Paulo;

/// 自定义时间格式化器，使用报价所在市场的圣保罗时区
struct SaoPauloTime;

impl FormatTime for SaoPauloTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Utc::now().with_timezone(&Sao_Paulo);
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));

    let console_layer = fmt::layer()
        .with_timer(SaoPauloTime)
        .with_target(true)
        .with_line_number(true);

    // 生产环境可以额外落盘
    let log_to_file = std::env::var("LOG_TO_FILE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    if log_to_file {
        let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string());

        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            &log_dir,
            "cotacao-backend.log"
        );

        let file_layer = fmt::layer()
            .with_timer(SaoPauloTime)
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
    }
}

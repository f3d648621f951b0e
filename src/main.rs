use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use titlebar_layout::config::{Config, OutputFormat};
use titlebar_layout::output::render_layout;
use titlebar_layout::services::{LayoutResolver, RealSystem};

#[derive(Parser, Debug)]
#[command(name = "titlebar-layout")]
#[command(about = "Выводит раскладку кнопок заголовка окна для текущей среды рабочего стола")]
struct Args {
    /// Путь к файлу конфигурации
    #[arg(short, long, default_value = "titlebar.toml")]
    config: String,

    /// Режим сухого запуска: показать источник раскладки, не запуская команд и не читая файлов
    #[arg(long)]
    dry_run: bool,

    /// Уровень логирования (переопределяет конфигурацию)
    #[arg(long)]
    log_level: Option<String>,

    /// Формат вывода (переопределяет конфигурацию)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Загрузка конфигурации
    let mut config = Config::load(&args.config)?;
    if let Some(level) = args.log_level {
        config.logging.level = level;
        config.validate()?;
    }

    // Инициализация системы логирования
    init_tracing(&config.logging.level)?;

    info!("Запуск titlebar-layout v{}", env!("CARGO_PKG_VERSION"));
    debug!("Конфигурация: {:?}", config);

    let system = RealSystem::new();
    let resolver = LayoutResolver::new(&system, &config.resolver);

    if args.dry_run {
        let plan = resolver.plan()?;
        info!("Режим сухого запуска - команды и файлы не используются");
        println!("{}", plan);
        return Ok(());
    }

    let layout = resolver.resolve()?;
    let format = args.format.unwrap_or(config.output.format);
    println!("{}", render_layout(&layout, format)?);

    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

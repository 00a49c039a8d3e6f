use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use human_panic::setup_panic;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

// 从 lib.rs 导入模块
use migration::{Migrator, MigratorTrait};
use rust_university_reports::config::AppConfig;
use rust_university_reports::errors::{Result, UniversityError};
use rust_university_reports::models::AppStartTime;
use rust_university_reports::models::reports::entities::ReportKind;
use rust_university_reports::routes;
use rust_university_reports::runtime::lifetime;
use rust_university_reports::seed::Seeder;
use rust_university_reports::storage::sea_orm_storage::SeaOrmStorage;
use rust_university_reports::storage::{Storage, create_storage};
use rust_university_reports::utils::{query_error_handler, render_report};

#[derive(Parser)]
#[command(name = "university-reports", version, about)]
struct Cli {
    /// 配置环境，决定加载的 config.{ENV} 文件
    #[arg(long, global = true, env = "APP_ENV")]
    config_env: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 数据库迁移
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// 清空并填充随机数据
    Seed {
        /// 固定随机种子
        #[arg(long)]
        seed: Option<u64>,
    },
    /// 执行报表，例如 `report select-3 Physics`，`report all` 执行全部
    Report {
        name: String,
        args: Vec<String>,
    },
    /// 启动 HTTP 服务
    Serve,
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    Up,
    Down,
    Fresh,
    Status,
}

fn print_error(err: &UniversityError) {
    #[cfg(debug_assertions)]
    eprintln!("{}", err.format_colored());
    #[cfg(not(debug_assertions))]
    eprintln!("{}", err.format_simple());
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    let cli = Cli::parse();

    // 初始化配置
    if let Err(e) = AppConfig::init_with_env(cli.config_env.as_deref()) {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    let outcome = match cli.command {
        Command::Serve => return serve(config, app_start_time).await,
        Command::Migrate { action } => migrate(config, action).await,
        Command::Seed { seed } => seed_database(config, seed).await,
        Command::Report { name, args } => run_report(config, &name, &args).await,
    };

    if let Err(e) = outcome {
        print_error(&e);
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}

/// 执行迁移命令，连接时不自动迁移
async fn migrate(config: &AppConfig, action: MigrateAction) -> Result<()> {
    let mut db_config = config.database.clone();
    db_config.auto_migrate = false;
    let storage = SeaOrmStorage::connect(&db_config).await?;
    let db = storage.connection();

    let result = match action {
        MigrateAction::Up => Migrator::up(db, None).await,
        MigrateAction::Down => Migrator::down(db, Some(1)).await,
        MigrateAction::Fresh => Migrator::fresh(db).await,
        MigrateAction::Status => Migrator::status(db).await,
    };
    result.map_err(|e| UniversityError::migration(format!("数据库迁移失败: {e}")))?;

    info!("Migration command completed");
    Ok(())
}

async fn seed_database(config: &AppConfig, seed: Option<u64>) -> Result<()> {
    let storage = create_storage(&config.database).await?;

    let mut seeder = match seed {
        Some(seed) => {
            info!("Seeding with fixed seed {}", seed);
            Seeder::with_seed(config.seed.clone(), seed)
        }
        None => Seeder::new(config.seed.clone()),
    };
    let summary = seeder.populate(storage.as_ref()).await?;

    println!(
        "Seeded {} groups, {} teachers, {} subjects, {} students, {} grades",
        summary.groups, summary.teachers, summary.subjects, summary.students, summary.grades
    );
    Ok(())
}

async fn run_report(config: &AppConfig, name: &str, args: &[String]) -> Result<()> {
    let storage = create_storage(&config.database).await?;

    if name.eq_ignore_ascii_case("all") {
        return run_demo(storage).await;
    }

    let kind: ReportKind = name.parse()?;
    let output = storage.run_report(kind, args).await?;
    info!("报表 {} 返回 {} 行", kind, output.len());
    println!("{}", render_report(kind.title(), &output));
    Ok(())
}

/// 依次执行全部报表，参数取自库中第一个找到的记录
async fn run_demo(storage: Arc<dyn Storage>) -> Result<()> {
    let first_group = storage.list_groups().await?.into_iter().next();
    let first_teacher = storage.list_teachers().await?.into_iter().next();
    let first_subject = storage.list_subjects().await?.into_iter().next();
    let first_student = storage.list_students().await?.into_iter().next();

    let group = first_group.map(|g| g.name);
    let teacher = first_teacher.map(|t| t.name);
    let subject = first_subject.map(|s| s.name);
    let student = first_student.map(|s| s.name);

    for kind in ReportKind::ALL {
        let args: Option<Vec<String>> = kind
            .params()
            .iter()
            .map(|param| match *param {
                "group" => group.clone(),
                "teacher" => teacher.clone(),
                "subject" => subject.clone(),
                "student" => student.clone(),
                _ => None,
            })
            .collect();

        let Some(args) = args else {
            warn!("Skipping {}: no matching records in database", kind);
            continue;
        };

        let title = if args.is_empty() {
            kind.title().to_string()
        } else {
            format!("{} ({})", kind.title(), args.join(", "))
        };

        match storage.run_report(kind, &args).await {
            Ok(output) => println!("{}", render_report(&title, &output)),
            Err(e) => {
                println!("{title}");
                print_error(&e);
            }
        }
    }

    Ok(())
}

async fn serve(config: &'static AppConfig, app_start_time: AppStartTime) -> std::io::Result<()> {
    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_server_startup(config).await {
        Ok(startup) => startup,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(std::io::Error::other(e.format_simple()));
        }
    };
    let storage = startup.storage.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    warn!("Using {} CPU cores for the server", config.server.workers);

    let bind_address = config.server_bind_address();
    warn!("Starting server at http://{}", bind_address);

    // Start the HTTP server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(config.server.cors_max_age),
            )
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 设置查询参数错误处理器
            .app_data(web::Data::new(storage.clone()))
            .configure(routes::configure_report_routes) // 配置报表路由
            .configure(routes::configure_catalog_routes) // 配置基础数据路由
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    )) // 启用长连接
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    )) // 客户端超时
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    )) // 断连超时
    .workers(config.server.workers)
    .bind(bind_address)?
    .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}

use std::fmt;

use dashboard_core::Clock;
use dashboard_core::model::{Course, CourseId, LessonId, LoginDraft};
use services::{AppServices, CourseProgress};
use storage::repository::Storage;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCourseId { raw: String },
    InvalidLessonId { raw: String },
    InvalidDbUrl { raw: String },
    MissingFlag { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCourseId { raw } => write!(f, "invalid --course-id value: {raw}"),
            ArgsError::InvalidLessonId { raw } => write!(f, "invalid --lesson-id value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::MissingFlag { flag } => write!(f, "{flag} is required for this command"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- courses [--db <sqlite_url>] [--search <query>]");
    eprintln!("  cargo run -p app -- course --course-id <id> [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- toggle --course-id <id> --lesson-id <id> [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- login --email <email> --password <password> [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- logout [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- theme [--toggle] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dashboard.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DASH_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Courses,
    Course,
    Toggle,
    Login,
    Logout,
    Theme,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "courses" => Some(Self::Courses),
            "course" => Some(Self::Course),
            "toggle" => Some(Self::Toggle),
            "login" => Some(Self::Login),
            "logout" => Some(Self::Logout),
            "theme" => Some(Self::Theme),
            _ => None,
        }
    }

    /// Commands that read or mutate user data sit behind the login gate.
    fn requires_session(self) -> bool {
        matches!(self, Self::Courses | Self::Course | Self::Toggle)
    }
}

#[derive(Debug, Default)]
struct Args {
    db_url: Option<String>,
    course_id: Option<CourseId>,
    lesson_id: Option<LessonId>,
    email: Option<String>,
    password: Option<String>,
    search: Option<String>,
    toggle_theme: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    parsed.db_url = Some(normalize_sqlite_url(value));
                }
                "--course-id" => {
                    let value = require_value(args, "--course-id")?;
                    let id = value
                        .parse::<CourseId>()
                        .map_err(|_| ArgsError::InvalidCourseId { raw: value.clone() })?;
                    parsed.course_id = Some(id);
                }
                "--lesson-id" => {
                    let value = require_value(args, "--lesson-id")?;
                    let id = value
                        .parse::<LessonId>()
                        .map_err(|_| ArgsError::InvalidLessonId { raw: value.clone() })?;
                    parsed.lesson_id = Some(id);
                }
                "--email" => {
                    parsed.email = Some(require_value(args, "--email")?);
                }
                "--password" => {
                    parsed.password = Some(require_value(args, "--password")?);
                }
                "--search" => {
                    parsed.search = Some(require_value(args, "--search")?);
                }
                "--toggle" => {
                    parsed.toggle_theme = true;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn db_url(&self) -> String {
        self.db_url.clone().unwrap_or_else(|| {
            std::env::var("DASH_DB_URL")
                .ok()
                .map_or_else(|| "sqlite://dashboard.sqlite3".into(), normalize_sqlite_url)
        })
    }

    fn require_course_id(&self) -> Result<CourseId, ArgsError> {
        self.course_id
            .ok_or(ArgsError::MissingFlag { flag: "--course-id" })
    }

    fn require_lesson_id(&self) -> Result<LessonId, ArgsError> {
        self.lesson_id
            .ok_or(ArgsError::MissingFlag { flag: "--lesson-id" })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn progress_line(course: &Course, progress: &CourseProgress) -> String {
    format!(
        "  {:>2}  {:<36} {:>2} lessons  {:>3}%  {}",
        course.id().value(),
        course.title(),
        course.total_lessons(),
        progress.percent,
        progress.badge.label()
    )
}

async fn show_courses(services: &AppServices, search: Option<&str>) {
    let catalog = services.catalog();
    let courses: Vec<&Course> = match search {
        Some(query) => catalog.search(query),
        None => catalog.courses().iter().collect(),
    };

    if courses.is_empty() {
        println!("No courses found.");
        return;
    }

    let progress = services.progress();
    for course in &courses {
        let state = progress.course_progress(course).await;
        println!("{}", progress_line(course, &state));
    }

    let overview = progress.overview(services.catalog().courses()).await;
    println!();
    println!(
        "Average progress: {}%  ({} of {} courses completed)",
        overview.average_percent,
        overview.completed_courses,
        overview.courses.len()
    );
}

async fn show_course(services: &AppServices, course_id: CourseId) {
    let Some(course) = services.catalog().get(course_id) else {
        eprintln!("course {course_id} not found");
        std::process::exit(2);
    };

    let progress = services.progress();
    let state = progress.course_progress(course).await;

    println!("{}  [{}]", course.title(), course.category());
    println!("{}", course.description());
    println!("Instructor: {}", course.instructor());
    println!();
    for (index, lesson) in course.lessons().iter().enumerate() {
        let mark = if state.completed.contains(lesson.id) {
            'x'
        } else {
            ' '
        };
        println!(
            " [{mark}] {:02}  {:<40} ({}, {})",
            index + 1,
            lesson.title,
            lesson.kind,
            lesson.duration
        );
    }
    println!();
    println!(
        "Progress: {}/{} lessons, {}% ({})",
        state.completed.len(),
        course.total_lessons(),
        state.percent,
        state.badge.label()
    );
}

async fn toggle_lesson(services: &AppServices, course_id: CourseId, lesson_id: LessonId) {
    let Some(course) = services.catalog().get(course_id) else {
        eprintln!("course {course_id} not found");
        std::process::exit(2);
    };
    if !course.contains_lesson(lesson_id) {
        eprintln!("lesson {lesson_id} not found in course {course_id}");
        std::process::exit(2);
    }

    let state = services.progress().toggle(course, lesson_id).await;
    let verb = if state.completed.contains(lesson_id) {
        "complete"
    } else {
        "incomplete"
    };
    println!(
        "Lesson {lesson_id} marked {verb}. Progress: {}% ({})",
        state.percent,
        state.badge.label()
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: list courses when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Courses,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Courses,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    let db_url = args.db_url();
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url).await?;
    let services = AppServices::from_storage(Clock::default_clock(), &storage)?;

    if cmd.requires_session() {
        let Some(user) = services.session().current().await else {
            eprintln!("not logged in (run: cargo run -p app -- login --email <email> --password <password>)");
            std::process::exit(2);
        };
        log::debug!("session for {}", user.email());
    }

    match cmd {
        Command::Courses => {
            show_courses(&services, args.search.as_deref()).await;
        }
        Command::Course => {
            let course_id = args.require_course_id()?;
            show_course(&services, course_id).await;
        }
        Command::Toggle => {
            let course_id = args.require_course_id()?;
            let lesson_id = args.require_lesson_id()?;
            toggle_lesson(&services, course_id, lesson_id).await;
        }
        Command::Login => {
            let email = args.email.clone().ok_or(ArgsError::MissingFlag {
                flag: "--email",
            })?;
            let password = args.password.clone().ok_or(ArgsError::MissingFlag {
                flag: "--password",
            })?;
            match services.session().login(LoginDraft::new(email, password)).await {
                Ok(session) => println!("Signed in as {}.", session.email()),
                Err(err) => {
                    eprintln!("login failed: {err}");
                    std::process::exit(2);
                }
            }
        }
        Command::Logout => {
            services.session().logout().await;
            println!("Signed out.");
        }
        Command::Theme => {
            let theme = if args.toggle_theme {
                services.theme().toggle().await
            } else {
                services.theme().current().await
            };
            println!("Theme: {theme}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

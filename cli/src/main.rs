use std::path::PathBuf;

use academy::error::{AppError, AppResult};
use academy::model::entity::{
    Course, CourseCreate, Lesson, LessonCreate, Module, ModuleCreate,
};
use academy::model::{DbConnection, ModelManager};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the academy course DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply database migrations
    Migrate {
        #[arg(long, default_value = "./migrations")]
        dir: PathBuf,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        slug: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        thumbnail_url: Option<String>,
        #[arg(long, default_value_t = false)]
        published: bool,
    },
    Publish {
        #[arg(long)]
        id: Uuid,
    },
    Unpublish {
        #[arg(long)]
        id: Uuid,
    },
}

/// Module management
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        #[arg(long)]
        course_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = false)]
        published: bool,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        module_id: Uuid,
        #[arg(long)]
        title: String,
        /// Path to a Markdown file with lesson content
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        video_url: Option<String>,
        #[arg(long)]
        duration_minutes: Option<i32>,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
        #[arg(long, default_value_t = false)]
        published: bool,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let uri = std::env::var("DATABASE_URL").map_err(|_| AppError::MissingEnv("DATABASE_URL"))?;
    let db_con = DbConnection::connect(&uri)?;

    if let Commands::Migrate { dir } = &args.command {
        db_con.migrate(dir).await?;
        println!("Migrations applied from {}", dir.display());
        return Ok(());
    }

    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::Migrate { .. } => {}

        Commands::Course { action } => match action {
            CourseCommands::Add {
                title,
                slug,
                description,
                category,
                level,
                price,
                thumbnail_url,
                published,
            } => {
                let course = Course::create(
                    &mm,
                    CourseCreate {
                        title,
                        slug,
                        description,
                        category,
                        level,
                        price,
                        thumbnail_url,
                        is_published: published,
                    },
                )
                .await?;
                println!("Course created: {}", course.id());
            }
            CourseCommands::Publish { id } => set_published(&mm, id, true).await?,
            CourseCommands::Unpublish { id } => set_published(&mm, id, false).await?,
        },

        Commands::Module { action } => match action {
            ModuleCommands::Add {
                course_id,
                title,
                description,
                order_index,
                published,
            } => {
                let module = Module::create(
                    &mm,
                    ModuleCreate {
                        course_id,
                        title,
                        description,
                        order_index: Some(order_index),
                        is_published: published,
                    },
                )
                .await?;
                println!("Module created: {}", module.id());
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                module_id,
                title,
                file,
                video_url,
                duration_minutes,
                order_index,
                published,
            } => {
                let content = file.map(std::fs::read_to_string).transpose()?;
                let lesson = Lesson::create(
                    &mm,
                    LessonCreate {
                        module_id,
                        title,
                        content,
                        video_url,
                        duration_minutes,
                        order_index: Some(order_index),
                        is_published: published,
                    },
                )
                .await?;
                println!("Lesson created: {}", lesson.id());
            }
        },
    }

    Ok(())
}

async fn set_published(mm: &ModelManager, id: Uuid, published: bool) -> AppResult<()> {
    if Course::set_published(mm, id, published).await? {
        println!("Course {} is now {}", id, if published { "published" } else { "hidden" });
    } else {
        eprintln!("No course with id {}", id);
    }
    Ok(())
}

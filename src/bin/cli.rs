use clap::{Parser, Subcommand};
use newspulse::{
    db,
    repositories::SqliteUserRepository,
    services::user_service::{CreateUserRequest, UserService},
};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "newspulse-cli")]
#[command(about = "CLI tool for managing News Pulse users", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: Option<String>,

        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },
}

fn get_password(prompt: &str) -> anyhow::Result<String> {
    use std::io::{self, Write};
    print!("{}: ", prompt);
    io::stdout().flush()?;

    Ok(rpassword::read_password()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let pool = db::create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create {
                username,
                email,
                password,
            } => {
                let (password, password_confirm) = if let Some(pw) = password {
                    (pw.clone(), pw)
                } else {
                    let pw = get_password("Password")?;
                    let confirm = get_password("Confirm password")?;
                    (pw, confirm)
                };

                let user = user_service
                    .create_user(CreateUserRequest {
                        username,
                        password,
                        password_confirm: Some(password_confirm),
                        email,
                    })
                    .await?;

                println!("Created user '{}' (id {})", user.username, user.id);
            }
            UserCommands::List { limit, offset } => {
                let users = user_service.list_users(Some(limit), Some(offset)).await?;

                if users.is_empty() {
                    println!("No users found");
                } else {
                    println!("{:<6} {:<24} {:<20} {:<20}", "ID", "USERNAME", "CREATED", "LAST LOGIN");
                    for user in users {
                        println!(
                            "{:<6} {:<24} {:<20} {:<20}",
                            user.id,
                            user.username,
                            user.created_at,
                            user.last_login.as_deref().unwrap_or("-")
                        );
                    }
                }
            }
        },
    }

    Ok(())
}

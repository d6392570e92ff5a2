use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use dotenvy::dotenv;
use ecclesia_cli::commands::{self, TokenRequest, parse_permission_list};
use ecclesia_config::JwtConfig;
use ecclesia_core::permissions::{Action, Module};
use ecclesia_models::{GuardRequest, Role, default_permissions_for_name};
use serde_json::Value;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "ecclesia-cli")]
#[command(about = "Ecclesia CLI - Inspect roles, permissions and guards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default permission table
    Roles,
    /// Print the default permissions of one role
    Defaults {
        /// Role name as stored, e.g. Tesoureiro
        role: String,
    },
    /// Check a permission assignment against a role
    Validate {
        role: String,

        /// Granted permissions, e.g. financial.view financial.edit
        permissions: Vec<String>,
    },
    /// Evaluate a guard for a role and grant list
    Check {
        /// Role of the user
        #[arg(short = 'r', long)]
        role: String,

        /// Comma-separated granted permissions
        #[arg(short = 'p', long, default_value = "")]
        permissions: String,

        /// Required permission
        #[arg(long)]
        permission: Option<String>,

        /// Required module
        #[arg(short = 'm', long)]
        module: Option<Module>,

        /// Required action within the module
        #[arg(short = 'a', long, requires = "module")]
        action: Option<Action>,

        /// Required role
        #[arg(long)]
        required_role: Option<Role>,
    },
    /// Show the grant list a user gets when switching role
    RoleChange {
        /// Comma-separated current permissions
        #[arg(short = 'f', long, default_value = "")]
        from_permissions: String,

        /// New role
        role: String,
    },
    /// Mint a development access token signed with JWT_SECRET
    Token {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Role name (prompted if not provided)
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Comma-separated permissions (defaults of the role if not provided)
        #[arg(short = 'p', long)]
        permissions: Option<String>,

        /// User id (random if not provided)
        #[arg(long)]
        user_id: Option<Uuid>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let output: Value = match cli.command {
        Commands::Roles => serde_json::to_value(commands::roles_table())?,
        Commands::Defaults { role } => serde_json::to_value(commands::defaults(&role)?)?,
        Commands::Validate { role, permissions } => {
            serde_json::to_value(commands::validate(&role, &permissions))?
        }
        Commands::Check {
            role,
            permissions,
            permission,
            module,
            action,
            required_role,
        } => {
            let request = GuardRequest {
                permission,
                module,
                action,
                role: required_role,
            };
            let granted = parse_permission_list(&permissions);
            serde_json::to_value(commands::check(&role, &granted, &request))?
        }
        Commands::RoleChange {
            from_permissions,
            role,
        } => {
            let previous = parse_permission_list(&from_permissions);
            serde_json::to_value(commands::role_change(&previous, &role))?
        }
        Commands::Token {
            email,
            role,
            permissions,
            user_id,
        } => {
            let token = handle_token(email, role, permissions, user_id)?;
            println!("{}", token);
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn handle_token(
    email: Option<String>,
    role: Option<String>,
    permissions: Option<String>,
    user_id: Option<Uuid>,
) -> Result<String> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let role = match role {
        Some(role) => role,
        None => {
            let names: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
            let selection = Select::new()
                .with_prompt("Role")
                .items(&names)
                .default(0)
                .interact()
                .context("Failed to read role")?;
            names[selection].to_string()
        }
    };

    // Unknown role names are accepted and get no defaults
    let permissions = match permissions {
        Some(list) => parse_permission_list(&list),
        None => default_permissions_for_name(&role),
    };

    let request = TokenRequest {
        user_id: user_id.unwrap_or_else(Uuid::new_v4),
        email,
        role,
        permissions,
    };

    let token = commands::mint_token(&request, &JwtConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e.error))?;

    eprintln!(
        "✅ Token for {} ({}) with {} permission(s)",
        request.email,
        request.role,
        request.permissions.len()
    );

    Ok(token)
}

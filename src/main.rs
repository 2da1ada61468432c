//! HelperHub CLI
//!
//! Command-line client for the agency backend:
//! - Sign in and check the session
//! - Browse and filter helper profiles
//! - Manage favorites
//! - Submit the contact form and admin profile edits

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use helperhub::api::{AgencyApi, HttpAgencyApi};
use helperhub::cards::{CardModel, CardVariant};
use helperhub::catalogue::{CatalogueFilter, SortOrder};
use helperhub::config::{self, Config};
use helperhub::detail::open_by_id;
use helperhub::favorites::{toggle, FavoriteToggle, ToggleOutcome};
use helperhub::forms::{ContactForm, FormErrors, LoginForm, ProfileDraft, SignupForm};
use helperhub::helpers;
use helperhub::models::{HelperProfile, ProfileId};
use helperhub::reviews::{ReviewCache, ReviewSummary};
use helperhub::session::{AuthContext, SessionState};
use helperhub::store::{LocalStore, Preferences};

#[derive(Parser)]
#[command(name = "helperhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and manage domestic helper profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/helperhub/config.toml, then ./helperhub.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Agency API base URL, overriding the config
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Sign in with this email before running the command
    #[arg(long, env = "HELPERHUB_EMAIL", global = true)]
    pub email: Option<String>,

    #[arg(long, env = "HELPERHUB_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and show the account
    Login,

    /// Create an account
    Signup {
        /// Display name
        name: String,
    },

    /// End the session
    Logout,

    /// Show who the session belongs to
    Whoami,

    /// List helper profiles
    List {
        /// Text to look for in name, country or description
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        country: Vec<String>,
        /// Required skill (repeatable, all must match)
        #[arg(long)]
        skill: Vec<String>,
        /// Required language (repeatable, all must match)
        #[arg(long)]
        language: Vec<String>,
        /// Helper type (repeatable, any may match)
        #[arg(long = "type")]
        helper_type: Vec<String>,
        #[arg(long)]
        min_age: Option<u32>,
        #[arg(long)]
        max_age: Option<u32>,
        #[arg(long)]
        max_salary: Option<u32>,
        /// Only helpers open to placement
        #[arg(long)]
        available: bool,
        /// Only favorited helpers
        #[arg(long)]
        favorites: bool,
        /// newest, name, age, salary, salary-desc
        #[arg(long, default_value = "newest")]
        sort: String,
        /// classic, compact, modern, minimal, detailed, gallery
        #[arg(long, default_value = "classic")]
        variant: String,
    },

    /// Show one profile in full
    Show {
        id: String,
    },

    /// Add a profile to favorites
    Favorite {
        id: String,
    },

    /// Remove a profile from favorites
    Unfavorite {
        id: String,
    },

    /// List favorited profiles
    Favorites,

    /// Show customer reviews
    Reviews,

    /// Create or edit profiles (admin only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Send a message to the agency
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long = "from")]
        from_email: String,
        #[arg(long)]
        phone: Option<String>,
        message: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Create a profile from a TOML draft
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace a profile's fields from a TOML draft
    Update {
        id: String,
        #[arg(long)]
        file: PathBuf,
    },
    /// Print a profile as an editable TOML draft
    Draft {
        id: String,
    },
}

struct App {
    config: Config,
    store: Arc<LocalStore>,
    api: Arc<HttpAgencyApi>,
    auth: AuthContext,
    json: bool,
}

impl App {
    fn new(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = Config::resolve(cli.config.as_deref())?;
        if let Some(url) = &cli.api_url {
            config.api.base_url = url.clone();
        }
        helperhub::logging::init(&config.logging);

        let store = Arc::new(
            LocalStore::open(&config.data_dir())
                .with_context(|| format!("opening local store in {:?}", config.data_dir()))?,
        );
        let api = Arc::new(HttpAgencyApi::new(config.http_config())?);
        let auth = AuthContext::new(api.clone()).with_store(store.clone());

        Ok(Self {
            config,
            store,
            api,
            auth,
            json: cli.format == "json",
        })
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// Sign in with the supplied credentials, or check the existing session
    async fn connect(&self, cli: &Cli) -> anyhow::Result<SessionState> {
        match (&cli.email, &cli.password) {
            (Some(email), Some(password)) => {
                let request = LoginForm {
                    email: email.clone(),
                    password: password.clone(),
                }
                .validate()
                .map_err(form_error)?;
                self.auth.login(&request.email, &request.password).await?;
                Ok(self.auth.state().await)
            }
            _ => Ok(self.auth.initialize().await),
        }
    }

    async fn require_session(&self, cli: &Cli) -> anyhow::Result<()> {
        if !self.connect(cli).await?.is_authenticated() {
            bail!("Sign in first: pass --email and --password (or set HELPERHUB_EMAIL / HELPERHUB_PASSWORD)");
        }
        Ok(())
    }

    async fn favorite_ids(&self) -> HashSet<ProfileId> {
        if !self.auth.is_authenticated().await {
            return HashSet::new();
        }
        match self.auth.guard(self.api.list_favorites().await).await {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load favorites");
                HashSet::new()
            }
        }
    }

    fn print_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let template = config::generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &template)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    let app = App::new(&cli)?;
    if !app.json {
        greet_first_run(&app.store);
    }

    match &cli.command {
        Commands::Login => {
            if cli.email.is_none() || cli.password.is_none() {
                bail!("login needs --email and --password");
            }
            app.require_session(&cli).await?;
            print_user(&app, &app.auth.state().await)?;
        }

        Commands::Signup { name } => {
            let (Some(email), Some(password)) = (&cli.email, &cli.password) else {
                bail!("signup needs --email and --password");
            };
            let request = SignupForm {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                confirm_password: password.clone(),
            }
            .validate()
            .map_err(form_error)?;
            app.auth
                .signup(&request.name, &request.email, &request.password)
                .await?;
            print_user(&app, &app.auth.state().await)?;
        }

        Commands::Logout => {
            app.connect(&cli).await?;
            app.auth.logout().await;
            if !app.json {
                println!("Signed out.");
            }
        }

        Commands::Whoami => {
            let cached = app.auth.cached_user();
            let state = app.connect(&cli).await?;
            print_user(&app, &state)?;
            if let (false, false, Some(cached)) = (state.is_authenticated(), app.json, cached) {
                println!("(Last signed in as {}; that session has ended)", cached.display_name());
            }
        }

        Commands::List {
            search,
            country,
            skill,
            language,
            helper_type,
            min_age,
            max_age,
            max_salary,
            available,
            favorites,
            sort,
            variant,
        } => {
            let sort = SortOrder::from_str(sort)
                .with_context(|| format!("unknown sort order {:?}", sort))?;
            let variant = CardVariant::from_str(variant)
                .with_context(|| format!("unknown card variant {:?}", variant))?;

            let mut filter = CatalogueFilter::new()
                .search(search.clone().unwrap_or_default())
                .age_range(*min_age, *max_age)
                .max_salary(*max_salary)
                .available_only(*available)
                .favorites_only(*favorites)
                .sort_by(sort);
            filter.countries.extend(country.iter().cloned());
            filter.skills.extend(skill.iter().cloned());
            filter.languages.extend(language.iter().cloned());
            filter.types.extend(helper_type.iter().cloned());

            if *favorites {
                app.require_session(&cli).await?;
            } else {
                app.connect(&cli).await?;
            }

            let profiles = app.api.list_maids().await?;
            let favorite_ids = app.favorite_ids().await;
            let today = app.today();
            let shown = filter.apply(&profiles, today, &favorite_ids);

            let cards: Vec<CardModel> = shown
                .iter()
                .map(|p| CardModel::build(p, variant, today, &app.config.api.image_base_url))
                .collect();

            if app.json {
                app.print_json(&cards)?;
            } else if cards.is_empty() {
                println!("No helpers match these filters.");
            } else {
                for card in &cards {
                    print_card(card, favorite_ids.contains(&card.id));
                }
                println!();
                println!("{} of {} helpers", cards.len(), profiles.len());
            }
        }

        Commands::Show { id } => {
            app.connect(&cli).await?;
            let view = open_by_id(app.api.as_ref(), id).await;
            if view.is_fallback() && view.profile.name.is_empty() {
                bail!("No helper with id {}", id);
            }

            if app.json {
                app.print_json(&view.profile)?;
            } else {
                print_profile(&view.profile, app.today(), &app.config.api.image_base_url);
                if view.is_fallback() {
                    println!();
                    println!("(Showing summary; full record unavailable)");
                }
            }
        }

        Commands::Favorite { id } | Commands::Unfavorite { id } => {
            app.connect(&cli).await?;
            let currently = matches!(cli.command, Commands::Unfavorite { .. });
            let mut state = FavoriteToggle::new(id.clone(), currently);

            match toggle(&mut state, &app.auth, app.api.as_ref()).await {
                ToggleOutcome::Confirmed { favorited } => {
                    if app.json {
                        app.print_json(&serde_json::json!({ "id": id, "favorited": favorited }))?;
                    } else if favorited {
                        println!("Added {} to favorites.", id);
                    } else {
                        println!("Removed {} from favorites.", id);
                    }
                }
                outcome if outcome.needs_login() => {
                    bail!("Sign in to manage favorites: pass --email and --password");
                }
                ToggleOutcome::Busy => bail!("A favorite update is already in progress"),
                _ => bail!("Favorite update failed; nothing was changed"),
            }
        }

        Commands::Favorites => {
            app.require_session(&cli).await?;
            let favorite_ids = app.favorite_ids().await;
            let profiles = app.api.list_maids().await?;
            let today = app.today();

            let cards: Vec<CardModel> = profiles
                .iter()
                .filter(|p| favorite_ids.contains(&p.id))
                .map(|p| CardModel::build(p, CardVariant::Compact, today, &app.config.api.image_base_url))
                .collect();

            if app.json {
                app.print_json(&cards)?;
            } else if cards.is_empty() {
                println!("No favorites yet.");
                println!();
                println!("Add one with:");
                println!("  helperhub favorite <id>");
            } else {
                for card in &cards {
                    print_card(card, true);
                }
            }
        }

        Commands::Reviews => {
            if !app.config.reviews.enabled {
                bail!("Reviews are disabled in the config");
            }
            let cache = ReviewCache::new(
                app.config.reviews.url.clone(),
                app.config.reviews.ttl()?,
                app.store.clone(),
            )?;
            let summary = cache.get().await?;

            if app.json {
                app.print_json(&summary)?;
            } else {
                print_reviews(&summary);
            }
        }

        Commands::Admin { command } => {
            app.require_session(&cli).await?;
            if !app.auth.state().await.is_admin() {
                bail!("This account is not an admin");
            }
            let today = app.today();

            match command {
                AdminCommands::Create { file } => {
                    let payload = read_draft(file)?.validate(today).map_err(form_error)?;
                    let created = app.auth.guard(app.api.create_maid(&payload).await).await?;
                    println!("Created {} ({})", created.name, created.id);
                }
                AdminCommands::Update { id, file } => {
                    let payload = read_draft(file)?.validate(today).map_err(form_error)?;
                    let updated = app
                        .auth
                        .guard(app.api.update_maid(id, &payload).await)
                        .await?;
                    println!("Updated {} ({})", updated.name, updated.id);
                }
                AdminCommands::Draft { id } => {
                    let profile = app
                        .auth
                        .guard(app.api.get_maid(id, helperhub::Credentials::Include).await)
                        .await?;
                    let draft = ProfileDraft::from_profile(&profile);
                    print!("{}", toml::to_string_pretty(&draft)?);
                }
            }
        }

        Commands::Contact {
            name,
            from_email,
            phone,
            message,
        } => {
            let form = ContactForm {
                name: name.clone(),
                email: from_email.clone(),
                phone: phone.clone().unwrap_or_default(),
                message: message.clone(),
            };
            let message = form.validate().map_err(form_error)?;
            app.api.submit_contact(&message).await?;
            println!("Thanks {}, we'll be in touch.", message.name);
        }

        Commands::Config { .. } => unreachable!("handled before startup"),
    }

    Ok(())
}

fn greet_first_run(store: &Arc<LocalStore>) {
    let prefs = Preferences::new(store.clone());
    match prefs.should_show_welcome() {
        Ok(true) => {
            eprintln!("Welcome to HelperHub! Run `helperhub list --help` to start browsing.");
            eprintln!();
            if let Err(e) = prefs.mark_welcome_seen() {
                tracing::warn!(error = %e, "Could not save welcome flag");
            }
        }
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Could not read welcome flag"),
    }
}

fn form_error(errors: FormErrors) -> anyhow::Error {
    let details: Vec<String> = errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field, message))
        .collect();
    anyhow::anyhow!("{}\n{}", errors, details.join("\n"))
}

fn read_draft(path: &Path) -> anyhow::Result<ProfileDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading draft {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("parsing draft {:?}", path))
}

fn print_user(app: &App, state: &SessionState) -> anyhow::Result<()> {
    if app.json {
        return app.print_json(state);
    }
    match state.user() {
        Some(user) => {
            println!("Signed in as {}", user.display_name());
            if let Some(email) = &user.email {
                println!("  Email: {}", email);
            }
            println!("  Role:  {:?}", user.role);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

fn print_card(card: &CardModel, favorited: bool) {
    let heart = if favorited { "♥" } else { " " };
    let salary = card.salary_label.as_deref().unwrap_or("-");

    match card.variant {
        CardVariant::Minimal | CardVariant::Compact => {
            println!(
                "{} {:<10} {:<24} {:<14} {}",
                heart,
                card.id,
                card.title(),
                card.country,
                card.availability_label
            );
        }
        _ => {
            println!();
            println!("{} {}  [{}]", heart, card.title(), card.id);
            println!(
                "  {} | {} | {}",
                if card.country.is_empty() { "-" } else { card.country.as_str() },
                salary,
                card.availability_label
            );
            if !card.type_badges.is_empty() {
                println!("  Type: {}", card.type_badges.join(", "));
            }
            if !card.skills.is_empty() {
                let more = if card.hidden_skills > 0 {
                    format!(" +{} more", card.hidden_skills)
                } else {
                    String::new()
                };
                println!("  Skills: {}{}", card.skills.join(", "), more);
            }
            if !card.languages.is_empty() {
                println!("  Languages: {}", card.languages.join(", "));
            }
            if let Some(experience) = &card.experience {
                println!("  {}", experience);
            }
            if let Some(excerpt) = &card.excerpt {
                println!("  {}", excerpt);
            }
            if card.variant == CardVariant::Gallery {
                println!("  Photo: {}", card.image_url.as_deref().unwrap_or("-"));
            }
        }
    }
}

fn print_profile(profile: &HelperProfile, today: NaiveDate, image_base: &str) {
    let card = CardModel::build(profile, CardVariant::Detailed, today, image_base);
    println!("{}", card.title());
    println!("{}", "-".repeat(40));
    println!("{:<14} {}", "Country", if card.country.is_empty() { "-" } else { card.country.as_str() });
    if let Some(dob) = profile.date_of_birth {
        println!("{:<14} {}", "Born", helperhub::models::dates::format_date(dob));
    }
    if let Some(height) = profile.height {
        println!("{:<14} {} cm", "Height", height);
    }
    if let Some(weight) = profile.weight {
        println!("{:<14} {} kg", "Weight", weight);
    }
    println!("{:<14} {}", "Salary", card.salary_label.as_deref().unwrap_or("-"));
    if let Some(loan) = profile.loan {
        println!("{:<14} {}", "Loan", helpers::format_salary(loan));
    }
    println!("{:<14} {}", "Status", card.availability_label);
    if !card.skills.is_empty() {
        println!("{:<14} {}", "Skills", card.skills.join(", "));
    }
    if !card.languages.is_empty() {
        println!("{:<14} {}", "Languages", card.languages.join(", "));
    }
    if let Some(photo) = &card.image_url {
        println!("{:<14} {}", "Photo", photo);
    }
    if let Some(description) = &profile.description {
        println!();
        println!("{}", description.trim());
    }

    if !profile.employment_history.is_empty() {
        println!();
        println!("Employment history:");
        for record in &profile.employment_history {
            let span = match (record.from, record.to) {
                (Some(from), Some(to)) => format!(
                    "{} to {}",
                    helperhub::models::dates::format_date(from),
                    helperhub::models::dates::format_date(to)
                ),
                (Some(from), None) => {
                    format!("{} to present", helperhub::models::dates::format_date(from))
                }
                _ => "dates unknown".to_string(),
            };
            println!("  {:<14} {}", record.country, span);
            if let Some(scope) = &record.job_scope {
                println!("  {:<14} {}", "", scope);
            }
        }
    }
}

fn print_reviews(summary: &ReviewSummary) {
    println!(
        "{} {:.1} from {} reviews",
        ReviewSummary::stars(summary.rating),
        summary.rating,
        summary.total
    );
    for review in &summary.reviews {
        println!();
        println!(
            "{}  {}  {}",
            ReviewSummary::stars(review.rating as f32),
            review.author,
            review.relative_time
        );
        if !review.text.is_empty() {
            println!("  {}", review.text);
        }
    }
}

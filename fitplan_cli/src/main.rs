use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use fitplan_core::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Nutrition plans and training statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or edit the physical profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show the nutrition plan computed from the profile
    Plan {
        /// Print the JSON payload
        #[arg(long)]
        json: bool,
    },

    /// List the food reference table (macros per 100 g)
    Foods {
        #[arg(long)]
        json: bool,
    },

    /// List built-in exercises
    Exercises {
        /// Only show one muscle group (chest, back, shoulders, arms, legs, core, full_body)
        #[arg(long)]
        muscle: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Record a training session
    Log {
        /// Session date (YYYY-MM-DD or RFC 3339), defaults to now
        #[arg(long)]
        date: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Session RPE (1-10)
        #[arg(long)]
        rpe: Option<u8>,

        /// Explicit total volume; derived from the sets when omitted
        #[arg(long)]
        volume: Option<f64>,

        /// Workout this session followed
        #[arg(long)]
        workout: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Record the session as not completed
        #[arg(long)]
        incomplete: bool,

        /// Exercise sets as <exercise>:<sets>x<reps>[@<weight>][~<rpe>], repeatable
        #[arg(long = "set", value_name = "SET")]
        sets: Vec<String>,
    },

    /// Show training statistics over completed sessions
    Stats {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the stored profile with defaults applied
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Update profile fields; omitted fields keep their current value
    Set {
        /// Weight in kg (20-500)
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm (50-300)
        #[arg(long)]
        height: Option<f64>,

        /// Age in years (10-120)
        #[arg(long)]
        age: Option<u32>,

        /// definition, maintenance or volume
        #[arg(long)]
        goal: Option<String>,

        /// beginner, intermediate or advanced
        #[arg(long)]
        level: Option<String>,
    },
}

/// Files under the data directory
struct DataPaths {
    profile: PathBuf,
    sessions: PathBuf,
}

impl DataPaths {
    fn new(data_dir: &Path) -> Self {
        Self {
            profile: data_dir.join("profile.json"),
            sessions: data_dir.join("sessions.jsonl"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        fitplan_core::logging::init_with_level("debug");
    } else {
        fitplan_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    tracing::debug!("Using data directory {:?}", data_dir);
    let paths = DataPaths::new(&data_dir);

    match cli.command {
        Commands::Profile { action } => cmd_profile(&paths, action),
        Commands::Plan { json } => cmd_plan(&paths, &config, json),
        Commands::Foods { json } => cmd_foods(json),
        Commands::Exercises { muscle, json } => cmd_exercises(muscle, json),
        Commands::Log {
            date,
            duration,
            rpe,
            volume,
            workout,
            notes,
            incomplete,
            sets,
        } => {
            let logs = sets
                .iter()
                .map(|arg| parse_set_arg(arg, get_default_catalog()))
                .collect::<Result<Vec<_>>>()?;
            let input = NewSession {
                date: date.as_deref().map(parse_date).transpose()?,
                workout_id: workout,
                duration,
                total_volume: volume,
                rpe,
                notes,
                completed: Some(!incomplete),
                logs,
            };
            cmd_log(&paths, input)
        }
        Commands::Stats { json } => cmd_stats(&paths, &config, json),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_profile(paths: &DataPaths, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show { json } => {
            let profile = Profile::load(&paths.profile)?;
            if json {
                return print_json(&profile);
            }
            let p = profile.resolve();
            println!("Profile");
            println!("  Weight: {} kg", p.weight);
            println!("  Height: {} cm", p.height);
            println!("  Age:    {}", p.age);
            println!("  Goal:   {}", p.goal);
            println!("  Level:  {}", p.level);
            Ok(())
        }

        ProfileAction::Set {
            weight,
            height,
            age,
            goal,
            level,
        } => {
            let goal = goal.map(|label| {
                Goal::parse(&label).unwrap_or_else(|| {
                    eprintln!("Unknown goal: {}. Using MAINTENANCE.", label);
                    Goal::Maintenance
                })
            });
            let level = level.map(|label| {
                Level::parse(&label).unwrap_or_else(|| {
                    eprintln!("Unknown level: {}. Using BEGINNER.", label);
                    Level::Beginner
                })
            });

            let profile = Profile::update(&paths.profile, |profile| {
                if weight.is_some() {
                    profile.weight = weight;
                }
                if height.is_some() {
                    profile.height = height;
                }
                if age.is_some() {
                    profile.age = age;
                }
                if goal.is_some() {
                    profile.goal = goal;
                }
                if level.is_some() {
                    profile.level = level;
                }
                profile.validate()
            })?;

            let p = profile.resolve();
            println!(
                "✓ Profile saved: {} kg, {} cm, {} years, {}, {}",
                p.weight, p.height, p.age, p.goal, p.level
            );
            Ok(())
        }
    }
}

fn cmd_plan(paths: &DataPaths, config: &Config, json: bool) -> Result<()> {
    let profile = Profile::load(&paths.profile)?;
    let plan = build_plan(&profile, &config.nutrition);

    if json {
        return print_json(&plan);
    }

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} NUTRITION PLAN", plan.goal);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR {} kcal · TDEE {} kcal", plan.bmr, plan.tdee);
    println!("  Target: {} kcal", plan.calories);
    println!(
        "  Protein {} g · Carbs {} g · Fat {} g",
        plan.protein, plan.carbs, plan.fat
    );
    if plan.carbs < 0 {
        println!("  ⚠ Carbohydrate target is negative: check the profile values");
    }

    for meal in &plan.meals {
        println!();
        println!(
            "  {} {} - {} kcal (P {} / C {} / F {})",
            meal.time, meal.name, meal.calories, meal.protein, meal.carbs, meal.fat
        );
        for food in &meal.foods {
            println!("    · {} ({})", food.name, food.quantity);
        }
    }

    println!();
    println!("  Tips");
    for tip in &plan.tips {
        println!("  → {}", tip);
    }
    println!();
    Ok(())
}

fn cmd_foods(json: bool) -> Result<()> {
    let foods = food_database();
    if json {
        return print_json(foods);
    }

    println!("{:<24} {:>6} {:>8} {:>7} {:>6}", "Food (100 g)", "kcal", "protein", "carbs", "fat");
    for food in foods {
        let m = food.per_100g;
        println!(
            "{:<24} {:>6} {:>8} {:>7} {:>6}",
            food.name, m.calories, m.protein, m.carbs, m.fat
        );
    }
    Ok(())
}

fn cmd_exercises(muscle: Option<String>, json: bool) -> Result<()> {
    let filter = match muscle {
        Some(label) => Some(
            MuscleGroup::parse(&label)
                .ok_or_else(|| Error::Other(format!("Unknown muscle group: {}", label)))?,
        ),
        None => None,
    };

    let exercises = get_default_catalog().list(filter);
    if json {
        return print_json(&exercises);
    }

    for exercise in exercises {
        println!(
            "{:<24} {:<10} {}",
            exercise.id, exercise.muscle_group, exercise.name
        );
    }
    Ok(())
}

fn cmd_log(paths: &DataPaths, input: NewSession) -> Result<()> {
    let session = Session::create(input, Utc::now())?;

    let mut store = JsonlSessionStore::new(&paths.sessions);
    store.append(&session)?;

    println!("✓ Session logged!");
    println!("  Date:   {}", session.date.format("%Y-%m-%d %H:%M"));
    println!("  Logs:   {}", session.logs.len());
    match session.total_volume {
        Some(volume) => println!("  Volume: {}", volume),
        None => println!("  Volume: -"),
    }
    Ok(())
}

fn cmd_stats(paths: &DataPaths, config: &Config, json: bool) -> Result<()> {
    let store = JsonlSessionStore::new(&paths.sessions);
    let history = load_completed_history(&store)?;
    let stats = aggregate_with(&history, Utc::now(), &config.stats);

    if json {
        return print_json(&stats);
    }

    println!("Training stats");
    println!(
        "  Sessions:      {} ({} this week)",
        stats.total_sessions, stats.sessions_this_week
    );
    println!("  Per week:      {} (last 4 weeks)", stats.sessions_per_week);
    println!("  Total volume:  {}", stats.total_volume);
    println!("  Total minutes: {}", stats.total_duration);
    match stats.avg_rpe {
        Some(rpe) => println!("  Average RPE:   {}", rpe),
        None => println!("  Average RPE:   -"),
    }
    match stats.most_worked_muscle {
        Some(group) => println!("  Most worked:   {}", group),
        None => println!("  Most worked:   -"),
    }
    if !stats.weekly_volume.is_empty() {
        println!("  Weekly volume:");
        for (week, volume) in stats.weekly_volume.iter().rev() {
            println!("    {}  {}", week, volume);
        }
    }
    Ok(())
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidSession(format!("Invalid date {:?}: {}", value, e)))
}

/// Parse `<exercise>:<sets>x<reps>[@<weight>][~<rpe>]` into an exercise log
fn parse_set_arg(arg: &str, catalog: &ExerciseCatalog) -> Result<ExerciseLog> {
    let invalid = |reason: &str| {
        Error::InvalidSession(format!(
            "Invalid set {:?}: {} (expected <exercise>:<sets>x<reps>[@<weight>][~<rpe>])",
            arg, reason
        ))
    };

    let (exercise_id, rest) = arg.split_once(':').ok_or_else(|| invalid("missing ':'"))?;
    let exercise = catalog.get(exercise_id.trim())?;

    let (rest, rpe) = match rest.split_once('~') {
        Some((head, rpe)) => (
            head,
            Some(rpe.trim().parse::<u8>().map_err(|_| invalid("bad RPE"))?),
        ),
        None => (rest, None),
    };
    let (rest, weight) = match rest.split_once('@') {
        Some((head, weight)) => (
            head,
            Some(weight.trim().parse::<f64>().map_err(|_| invalid("bad weight"))?),
        ),
        None => (rest, None),
    };
    let (sets, reps) = rest
        .split_once(['x', 'X'])
        .ok_or_else(|| invalid("missing <sets>x<reps>"))?;

    Ok(ExerciseLog {
        exercise: exercise.to_ref(),
        sets: sets.trim().parse().map_err(|_| invalid("bad sets"))?,
        reps: reps.trim().parse().map_err(|_| invalid("bad reps"))?,
        weight,
        rpe,
        notes: None,
    })
}

//! CLI command definitions for debate-coach.
//!
//! This module provides the command-line surface over the debate engine:
//! interactive debates, local argument scoring, topic browsing, and
//! practice drills.

use std::io::{self, BufRead, Read, Write};
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::coach::{DebateCoach, DebatePosition, Difficulty, Personality};
use crate::config::CoachConfig;
use crate::llm::{ChatProvider, FallbackChain, OpenRouterClient, ScriptedProvider};
use crate::practice;
use crate::scorer::{ArgumentAnalyzer, ScoreResult};
use crate::session::{DebateMessage, DebateSession, MAX_ROUNDS};
use crate::storage::{OfflineStore, StoredDebate, DEFAULT_DATA_DIR};
use crate::topics::{self, DebateTopic, TopicCategory};

/// Default number of practice drills per run.
const DEFAULT_PRACTICE_COUNT: usize = 5;

/// Debate practice against an AI sparring partner.
#[derive(Parser)]
#[command(name = "debate-coach")]
#[command(about = "Practice argumentative debate against an AI sparring partner")]
#[command(version)]
#[command(
    long_about = "debate-coach runs coached debate sessions against an AI opponent with \
instant argument scoring.\n\nExample usage:\n  debate-coach topics\n  debate-coach debate --random --position pro\n  debate-coach score --text \"Because the data shows improvement, this works.\""
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run an interactive debate session against the AI sparring partner.
    Debate(DebateArgs),

    /// Score an argument with the local heuristic analyzer.
    Score(ScoreArgs),

    /// Browse the debate topic catalog.
    Topics(TopicsArgs),

    /// Run practice drills (fallacy spotting, quick responses, and more).
    Practice(PracticeArgs),
}

/// Arguments for `debate-coach debate`.
#[derive(Parser, Debug)]
pub struct DebateArgs {
    /// Topic identifier from the catalog (see `debate-coach topics`).
    #[arg(short, long, conflicts_with = "random")]
    pub topic: Option<String>,

    /// Pick a random topic from the catalog.
    #[arg(long)]
    pub random: bool,

    /// Side to argue: pro or con.
    #[arg(short, long, default_value = "pro")]
    pub position: String,

    /// Opponent difficulty (beginner, intermediate, advanced).
    #[arg(short, long, default_value = "beginner")]
    pub difficulty: String,

    /// Run against the scripted offline opponent instead of a live model.
    #[arg(long)]
    pub offline: bool,

    /// Save the transcript to the offline store when the debate ends.
    #[arg(long)]
    pub save: bool,

    /// Data directory for saved transcripts.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: String,

    /// OpenRouter API key (can also be set via OPENROUTER_API_KEY env var).
    #[arg(long, env = "OPENROUTER_API_KEY")]
    pub api_key: Option<String>,

    /// Comma-separated fallback model chain override, strongest first.
    #[arg(short, long)]
    pub models: Option<String>,
}

/// Arguments for `debate-coach score`.
#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Argument text to score. Reads stdin when omitted.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Output the score result as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Arguments for `debate-coach topics`.
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    /// Only list topics in this category (e.g. education, technology).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only list topics at this difficulty (beginner, intermediate, advanced).
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Show one random topic instead of the full list.
    #[arg(long)]
    pub random: bool,

    /// Output the topics as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Arguments for `debate-coach practice`.
#[derive(Parser, Debug)]
pub struct PracticeArgs {
    /// Number of drills to run.
    #[arg(short = 'n', long, default_value_t = DEFAULT_PRACTICE_COUNT)]
    pub count: usize,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before
/// running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Debate(args) => run_debate_command(args).await?,
        Commands::Score(args) => run_score_command(args)?,
        Commands::Topics(args) => run_topics_command(args)?,
        Commands::Practice(args) => run_practice_command(args)?,
    }
    Ok(())
}

// ============================================================================
// Debate Command Implementation
// ============================================================================

async fn run_debate_command(args: DebateArgs) -> anyhow::Result<()> {
    let topic = resolve_topic(&args)?;
    let position = parse_position(&args.position)?;
    let difficulty = Difficulty::from_str(&args.difficulty).map_err(|e| anyhow::anyhow!(e))?;
    let personality = Personality::for_difficulty(difficulty);

    let coach = build_coach(&args)?;
    let mut session = DebateSession::new(coach, topic.title, personality, position);

    println!("=== {} ===", topic.title);
    println!("{}", topic.description);
    println!(
        "Jūs: {} | Oponentas: {} ({})\n",
        position.side_label(),
        session.personality().name,
        session.personality().difficulty,
    );

    info!(topic = topic.id, position = %position, "Starting debate session");

    let opening = session.open().await?;
    println!("{}: {}\n", session.personality().name, opening.content);

    let stdin = io::stdin();
    while !session.is_finished() {
        let prompt = format!("Jūs ({}/{}) > ", session.round(), MAX_ROUNDS);
        let line = match read_line(&stdin, &prompt)? {
            Some(line) => line,
            None => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "/quit" {
            break;
        }

        let outcome = session.submit_argument(trimmed).await?;

        println!(
            "\n{}: {}\n",
            session.personality().name,
            outcome.opponent_message.content
        );
        print_score_breakdown(&outcome.local_score);
        println!(
            "AI vertinimas: {}/100 - {}",
            outcome.assessment.score, outcome.assessment.analysis
        );
        println!("Treneris: {}\n", coach_feedback_of(&outcome.user_message));
    }

    if session.is_finished() {
        println!("Debatai baigti po {} raundų.", MAX_ROUNDS);
    }

    if args.save && !session.messages().is_empty() {
        let store = OfflineStore::new(&args.data_dir);
        store
            .record_debate(StoredDebate::from_session(&session))
            .await?;
        println!("Transkriptas išsaugotas: {}", args.data_dir);
    }

    Ok(())
}

fn resolve_topic(args: &DebateArgs) -> anyhow::Result<&'static DebateTopic> {
    if args.random {
        return Ok(topics::random());
    }

    match &args.topic {
        Some(id) => topics::by_id(id).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown topic '{}'. Run `debate-coach topics` to list available topics.",
                id
            )
        }),
        None => Err(anyhow::anyhow!(
            "No topic selected. Pass --topic <id> or --random."
        )),
    }
}

fn parse_position(raw: &str) -> anyhow::Result<DebatePosition> {
    match raw.to_lowercase().as_str() {
        "pro" | "uz" | "už" => Ok(DebatePosition::Pro),
        "con" | "pries" | "prieš" => Ok(DebatePosition::Con),
        other => Err(anyhow::anyhow!(
            "Unknown position '{}': expected pro or con",
            other
        )),
    }
}

fn build_coach(args: &DebateArgs) -> anyhow::Result<DebateCoach> {
    let model_override = args.models.as_deref().map(parse_model_spec).filter(|m| !m.is_empty());

    if args.offline {
        let provider: Arc<dyn ChatProvider> = Arc::new(offline_opponent());
        let chain = match model_override {
            Some(models) => FallbackChain::with_models(provider, models),
            None => FallbackChain::new(provider),
        };
        return Ok(DebateCoach::new(chain));
    }

    let config = match &args.api_key {
        Some(key) => CoachConfig::new(key.clone()),
        None => CoachConfig::from_env()?,
    };
    let client = match &config.base_url {
        Some(base_url) => OpenRouterClient::with_base_url(config.api_key.clone(), base_url.clone()),
        None => OpenRouterClient::new(config.api_key.clone()),
    };

    let models = model_override.unwrap_or(config.models);
    let chain = FallbackChain::with_models(Arc::new(client), models);
    Ok(DebateCoach::new(chain))
}

fn parse_model_spec(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Canned Lithuanian replies for practicing without a network connection.
///
/// The replies cycle across the rebuttal, feedback, and analysis calls, so
/// they are deliberately generic; the strength analysis falls back to its
/// defaults, which is the designed degradation for untagged replies.
fn offline_opponent() -> ScriptedProvider {
    ScriptedProvider::new(vec![
        "Suprantu jūsų poziciją, tačiau pažvelkime iš kitos pusės: ar tikrai \
         šis sprendimas pasiteisintų ilguoju laikotarpiu?"
            .to_string(),
        "Geras bandymas! Pamėginkite paremti teiginį konkrečiu pavyzdžiu ar \
         tyrimu, tai sustiprintų argumentą."
            .to_string(),
        "Jūsų argumentas turi logikos, bet trūksta įrodymų. Kas nutiktų, jei \
         situacija būtų priešinga?"
            .to_string(),
    ])
}

/// The session annotation glues the coach feedback and the assessment into
/// one string; for display we only want the coach's part.
fn coach_feedback_of(message: &DebateMessage) -> String {
    message
        .feedback
        .as_deref()
        .and_then(|f| f.split(" | Stiprumas:").next())
        .unwrap_or("")
        .to_string()
}

fn read_line(stdin: &io::Stdin, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

// ============================================================================
// Score Command Implementation
// ============================================================================

fn run_score_command(args: ScoreArgs) -> anyhow::Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = ArgumentAnalyzer::new().analyze(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_score_breakdown(&result);
    }

    Ok(())
}

fn print_score_breakdown(result: &ScoreResult) {
    println!("Įvertinimas: {}/100", result.score);
    for feedback in &result.feedback {
        println!("  {}", feedback);
    }
    for strength in &result.strengths {
        println!("  + {}", strength);
    }
    for improvement in &result.improvements {
        println!("  - {}", improvement);
    }
}

// ============================================================================
// Topics Command Implementation
// ============================================================================

fn run_topics_command(args: TopicsArgs) -> anyhow::Result<()> {
    if args.random {
        let topic = topics::random();
        if args.json {
            println!("{}", serde_json::to_string_pretty(topic)?);
        } else {
            print_topic(topic);
        }
        return Ok(());
    }

    let mut listed: Vec<&DebateTopic> = topics::all().iter().collect();

    if let Some(raw) = &args.category {
        let category = TopicCategory::from_str(raw).map_err(|e| anyhow::anyhow!(e))?;
        listed.retain(|t| t.category == category);
    }
    if let Some(raw) = &args.difficulty {
        let difficulty = Difficulty::from_str(raw).map_err(|e| anyhow::anyhow!(e))?;
        listed.retain(|t| t.difficulty == difficulty);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if listed.is_empty() {
        println!("No topics match the given filters.");
        return Ok(());
    }

    for topic in listed {
        print_topic(topic);
    }

    Ok(())
}

fn print_topic(topic: &DebateTopic) {
    println!(
        "{} {:24} [{}] {}",
        topic.category.icon(),
        topic.id,
        topic.difficulty,
        topic.title
    );
    println!("     {}", topic.description);
}

// ============================================================================
// Practice Command Implementation
// ============================================================================

fn run_practice_command(args: PracticeArgs) -> anyhow::Result<()> {
    let deck: Vec<_> = practice::shuffled().into_iter().take(args.count).collect();
    if deck.is_empty() {
        println!("No practice exercises available.");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut total = 0u32;
    let mut possible = 0u32;

    for (number, exercise) in deck.iter().enumerate() {
        possible += exercise.points;

        println!(
            "\n--- {}/{}: {} [{}] ---",
            number + 1,
            deck.len(),
            exercise.title,
            exercise.kind
        );
        println!("{}\n", exercise.question);

        let earned = if exercise.is_multiple_choice() {
            for (index, option) in exercise.options.iter().enumerate() {
                println!("  {}) {}", index + 1, option);
            }

            let answer = match read_line(&stdin, "Pasirinkimas > ")? {
                Some(line) => line
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1)),
                None => break,
            };
            exercise.evaluate_choice(answer)
        } else {
            let answer = match read_line(&stdin, "Atsakymas > ")? {
                Some(line) => line,
                None => break,
            };
            exercise.evaluate_response(&answer)
        };

        total += earned;
        println!("Taškai: {}{}", if earned > 0 { "+" } else { "" }, earned);
        println!("Paaiškinimas: {}", exercise.explanation);
    }

    println!("\nIš viso surinkta: {}/{} taškų", total, possible);
    Ok(())
}

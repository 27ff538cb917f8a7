use clap::{Parser, Subcommand};

use trivia_quiz::sourcing::{Category, Difficulty, QuizConfig};
use trivia_quiz::{ClassicQuiz, QuizError, logging, trivia};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log at debug level (logs go to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the built-in four-question quiz
    Classic,
    /// Play questions fetched from the Open Trivia DB (default)
    Trivia {
        /// Question category
        #[arg(short, long, value_enum, default_value_t = Category::GeneralKnowledge)]
        category: Category,

        /// Question difficulty
        #[arg(short, long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,

        /// How many questions to play
        #[arg(short = 'n', long, default_value_t = 10)]
        questions: usize,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = match args.command {
        Some(Command::Classic) => ClassicQuiz::new().run(),
        Some(Command::Trivia {
            category,
            difficulty,
            questions,
        }) => run_trivia(QuizConfig {
            category,
            difficulty,
            amount: questions,
        }),
        None => run_trivia(QuizConfig::default()),
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run_trivia(config: QuizConfig) -> Result<(), QuizError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(trivia::run(config))
}

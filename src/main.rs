use clap::Parser;
use reet_mock::models::find_topic;
use reet_mock::{
    init_logging, Config, Difficulty, ExamError, GeminiClient, MockExam, QuestionCount,
    QuizConfig,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Subject id or name to preselect (e.g. raj_gk)
    #[arg(short, long)]
    topic: Option<String>,

    /// easy, medium, hard or expert
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Number of questions: 10, 20, 30 or 50
    #[arg(short = 'n', long, value_parser = parse_count)]
    count: Option<QuestionCount>,

    /// Gemini model to generate questions with
    #[arg(short, long)]
    model: Option<String>,
}

fn parse_count(s: &str) -> Result<QuestionCount, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    QuestionCount::try_from(n)
}

impl Args {
    fn quiz_config(&self) -> Result<QuizConfig, ExamError> {
        let mut quiz = QuizConfig::default();
        if let Some(key) = &self.topic {
            let topic = find_topic(key)
                .ok_or_else(|| ExamError::Config(format!("unknown topic '{}'", key)))?;
            quiz.topic = topic.name.to_string();
        }
        if let Some(difficulty) = self.difficulty {
            quiz.difficulty = difficulty;
        }
        if let Some(count) = self.count {
            quiz.question_count = count;
        }
        Ok(quiz)
    }
}

async fn run(args: Args) -> Result<(), ExamError> {
    let mut config = Config::from_env();
    if let Some(model) = args.model.clone() {
        config.model = model;
    }
    init_logging(&config)?;

    let quiz = args.quiz_config()?;
    let source = GeminiClient::new(&config).map_err(|e| ExamError::Config(e.to_string()))?;
    if config.api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; starting a quiz will fail");
    }

    MockExam::new(source, &config, quiz).run().await
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running mock exam: {}", e);
        std::process::exit(1);
    }
}

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use glossbridge_core::{Glossary, Translator};
use glossbridge_morph::{EnglishLemmatizer, FrenchLemmatizer, LoadMode};
use glossbridge_types::Lemmatizer;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use glossbridge_server::{AppState, router};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_EN_FR: &str = "en-fr-enwiktionary.txt";
const DEFAULT_FR_EN: &str = "fr-en-enwiktionary.txt";
const DEFAULT_WORDNET_PATH: &str = "wordnet";
const DEFAULT_WORDNET_IMAGE_PATH: &str = "/app/wordnet";
const DEFAULT_FRENCH_LEXICON: &str = "french-lexicon.tsv";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config();
    info!("binding to {}:{}", config.host, config.port);
    info!("en-fr glossary at {}", config.en_fr_path.display());
    info!("fr-en glossary at {}", config.fr_en_path.display());
    info!(
        "using wordnet at {} (mode: {:?})",
        config.wordnet_path.display(),
        config.wordnet_mode
    );
    info!("french lexicon at {}", config.french_lexicon.display());
    if config.disable_cache {
        info!("cache headers disabled");
    }

    let start = Instant::now();
    let en_fr = Glossary::load(&config.en_fr_path)?;
    let fr_en = Glossary::load(&config.fr_en_path)?;
    info!("glossaries indexed in {} ms", start.elapsed().as_millis());

    let morph_start = Instant::now();
    let english: Arc<dyn Lemmatizer> = Arc::new(EnglishLemmatizer::load(
        &config.wordnet_path,
        config.wordnet_mode,
    )?);
    let french: Arc<dyn Lemmatizer> = Arc::new(FrenchLemmatizer::load(&config.french_lexicon)?);
    info!("lemmatizers loaded in {} ms", morph_start.elapsed().as_millis());

    let state = AppState {
        translator: Arc::new(Translator::new(en_fr, fr_en, english, french)),
        disable_cache: config.disable_cache,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    en_fr_path: PathBuf,
    fr_en_path: PathBuf,
    wordnet_path: PathBuf,
    wordnet_mode: LoadMode,
    french_lexicon: PathBuf,
    disable_cache: bool,
}

fn load_config() -> Config {
    let mut disable_cache = false;
    let mut cli_en_fr: Option<PathBuf> = None;
    let mut cli_fr_en: Option<PathBuf> = None;
    let mut cli_wordnet_dir: Option<PathBuf> = None;
    let mut cli_wordnet_mode: Option<LoadMode> = None;
    let mut cli_french_lexicon: Option<PathBuf> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-cache" => disable_cache = true,
            "--wordnet-dir" => {
                if let Some(path) = args.next() {
                    cli_wordnet_dir = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--wordnet-dir=") {
                    cli_wordnet_dir = Some(PathBuf::from(path));
                } else if let Some(mode) = arg.strip_prefix("--wordnet-mode=") {
                    cli_wordnet_mode = parse_load_mode(mode);
                } else if let Some(path) = arg.strip_prefix("--en-fr=") {
                    cli_en_fr = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--fr-en=") {
                    cli_fr_en = Some(PathBuf::from(path));
                } else if let Some(path) = arg.strip_prefix("--french-lexicon=") {
                    cli_french_lexicon = Some(PathBuf::from(path));
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let en_fr_path = path_setting(cli_en_fr, "EN_FR_GLOSSARY", DEFAULT_EN_FR);
    let fr_en_path = path_setting(cli_fr_en, "FR_EN_GLOSSARY", DEFAULT_FR_EN);
    let wordnet_path = cli_wordnet_dir
        .or_else(|| env::var("WORDNET_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(default_wordnet_path);
    let wordnet_mode = cli_wordnet_mode
        .or_else(|| {
            env::var("WORDNET_LOAD_MODE")
                .ok()
                .as_deref()
                .and_then(parse_load_mode)
        })
        .unwrap_or(LoadMode::Mmap);
    let french_lexicon = path_setting(cli_french_lexicon, "FRENCH_LEXICON", DEFAULT_FRENCH_LEXICON);

    Config {
        host,
        port,
        en_fr_path,
        fr_en_path,
        wordnet_path,
        wordnet_mode,
        french_lexicon,
        disable_cache,
    }
}

fn path_setting(cli: Option<PathBuf>, var: &str, default: &str) -> PathBuf {
    cli.or_else(|| env::var(var).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

fn default_wordnet_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_WORDNET_PATH);
    if local.exists() {
        return local;
    }
    PathBuf::from(DEFAULT_WORDNET_IMAGE_PATH)
}

fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}

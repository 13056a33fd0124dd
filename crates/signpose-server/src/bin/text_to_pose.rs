//! Text-to-pose CLI for signpose.
//!
//! Runs the full offline pipeline: gloss the input text, resolve every
//! gloss to a clip through the lexicon, and write the concatenated pose
//! file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p signpose-server --bin text-to-pose -- \
//!   --text "xin chào, tôi tên là Thành" \
//!   --glosser dictionary \
//!   --lexicon assets/lexicon \
//!   --spoken-language vi --signed-language vsl \
//!   --pose output.pose.json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use signpose_core::write_clip;
use signpose_lexicon::LexiconIndex;
use signpose_resolve::GlossToPose;
use signpose_translate::GlosserRegistry;

struct CliConfig {
    text: String,
    glosser: String,
    lexicon: PathBuf,
    spoken_language: String,
    signed_language: String,
    pose: PathBuf,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let config = parse_args(&args);

    let index = LexiconIndex::build(&config.lexicon).unwrap_or_else(|e| {
        eprintln!("ERROR: failed to load lexicon: {e}");
        std::process::exit(1);
    });
    eprintln!(
        "Loaded lexicon: {} words, languages {:?}",
        index.word_count(),
        index.known_spoken_languages()
    );
    let index = Arc::new(index);

    let registry = GlosserRegistry::with_defaults(index.words());
    let glosser = registry.get(&config.glosser).unwrap_or_else(|e| {
        eprintln!("ERROR: {e} (available: {})", registry.names().join(", "));
        std::process::exit(1);
    });

    let sentences = glosser
        .text_to_gloss(&config.text, &config.spoken_language)
        .unwrap_or_else(|e| {
            eprintln!("ERROR: glossing failed: {e}");
            std::process::exit(1);
        });
    if sentences.is_empty() {
        eprintln!("ERROR: no glosses produced from the input text");
        std::process::exit(1);
    }
    for (i, sentence) in sentences.iter().enumerate() {
        let words: Vec<&str> = sentence.iter().map(|item| item.word.as_str()).collect();
        eprintln!("Sentence {i}: {words:?}");
    }

    let resolver = GlossToPose::new(index);
    let pose = resolver
        .resolve(&sentences, &config.spoken_language, &config.signed_language)
        .unwrap_or_else(|e| {
            eprintln!("ERROR: resolution failed: {e}");
            std::process::exit(1);
        });

    write_clip(&pose, &config.pose).unwrap_or_else(|e| {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    });

    eprintln!(
        "Wrote {} frames ({:.2}s at {} fps) to {}",
        pose.len(),
        pose.duration_secs(),
        pose.header.fps,
        config.pose.display()
    );
}

fn parse_args(args: &[String]) -> CliConfig {
    let mut text = None;
    let mut glosser = "dictionary".to_string();
    let mut lexicon = None;
    let mut spoken_language = "vi".to_string();
    let mut signed_language = "vsl".to_string();
    let mut pose = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1).unwrap_or_else(|| usage(&args[0], flag));
        match flag {
            "--text" => text = Some(value.clone()),
            "--glosser" => glosser = value.clone(),
            "--lexicon" => lexicon = Some(PathBuf::from(value)),
            "--spoken-language" => spoken_language = value.clone(),
            "--signed-language" => signed_language = value.clone(),
            "--pose" => pose = Some(PathBuf::from(value)),
            _ => {
                usage(&args[0], flag);
            }
        }
        i += 2;
    }

    CliConfig {
        text: text.unwrap_or_else(|| usage(&args[0], "--text")),
        glosser,
        lexicon: lexicon.unwrap_or_else(|| usage(&args[0], "--lexicon")),
        spoken_language,
        signed_language,
        pose: pose.unwrap_or_else(|| usage(&args[0], "--pose")),
    }
}

fn usage(program: &str, flag: &str) -> ! {
    eprintln!("missing or unknown argument: {flag}");
    eprintln!(
        "usage: {program} --text <text> --lexicon <dir> --pose <out> \
         [--glosser dictionary|simple] [--spoken-language vi] [--signed-language vsl]"
    );
    std::process::exit(2);
}

use clap::{Arg, ArgAction, Command};
use dorev::{Dictionary, resolve, tokenize, translate_message};
use dorev_sync::{DictionaryStore, HookResult, HttpSource, MessageHook, Settings};
use std::io::Read;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("dorev")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrite modern Russian text in pre-reform spelling")
        .arg(
            Arg::new("message")
                .help("Text to translate (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("dict")
                .long("dict")
                .short('d')
                .value_name("FILE")
                .help("Use a local JSON dictionary instead of downloading one"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .short('u')
                .help("Dictionary URL (default: $DOREV_DICT_URL or the hosted dictionary)"),
        )
        .arg(
            Arg::new("cache-dir")
                .long("cache-dir")
                .value_name("DIR")
                .help("Directory for downloaded dictionaries"),
        )
        .arg(
            Arg::new("refresh")
                .long("refresh")
                .short('r')
                .help("Discard the cached dictionary and download it again")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("disabled")
                .long("disabled")
                .help("Print the message unchanged, as a disabled translator would")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show debug logs and how each token was translated")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();

    let message = match matches.get_one::<String>("message") {
        Some(message) => message.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut settings = Settings::from_env()?;
    if let Some(url) = matches.get_one::<String>("url") {
        settings = settings.with_dictionary_url(url);
    }
    if let Some(dir) = matches.get_one::<String>("cache-dir") {
        settings = settings.with_cache_dir(PathBuf::from(dir));
    }
    if matches.get_flag("disabled") {
        settings = settings.with_enabled(false);
    }

    if let Some(path) = matches.get_one::<String>("dict") {
        let dictionary = Dictionary::load_from_file(&PathBuf::from(path))?;
        if verbose {
            report(&message, &dictionary);
        }
        let output = if settings.enabled {
            translate_message(&message, Some(&dictionary))?
        } else {
            message
        };
        println!("{}", output);
        return Ok(());
    }

    let store = DictionaryStore::new(settings, Box::new(HttpSource::new()?));
    let mut hook = MessageHook::new(store);

    if matches.get_flag("refresh") {
        let words = hook.store_mut().refresh().await?.len();
        eprintln!("Dictionary refreshed: {} words", words);
    }

    let output = match hook.on_send_message(&message).await {
        Ok(HookResult::Modify(text)) => text,
        Ok(HookResult::Default) => message.clone(),
        Err(e) => {
            eprintln!("❌ Failed to translate: {}", e);
            return Err(e.into());
        }
    };

    if verbose {
        if let Some(dictionary) = hook.store().dictionary() {
            report(&message, dictionary);
        }
    }
    println!("{}", output);

    Ok(())
}

/// Print every token with its kind and rendering to stderr.
fn report(message: &str, dictionary: &Dictionary) {
    let tokens = tokenize(message);
    eprintln!("📝 {} tokens, {} dictionary words", tokens.len(), dictionary.len());
    for item in resolve(&tokens, dictionary) {
        eprintln!(
            "   {:<12} {:?} → {:?}",
            format!("{:?}", item.token.kind()),
            item.token.origin(),
            item.text
        );
    }
}

//! paralegal CLI - AI legal assistant

mod groq;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paralegal::{
    accept_upload_with_options, export_draft, preview, render_with_options, Assistant,
    ExtractedText, LegalTask, PageSize, ParseOptions, PdfParser, RenderOptions, RenderedDocument,
    Session, DISCLAIMER, PREVIEW_CHARS,
};

use groq::{GroqClient, GroqConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Parser)]
#[command(name = "paralegal")]
#[command(version)]
#[command(about = "AI legal assistant: draft, research, review and export", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF document
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output JSON with the page count
        #[arg(long)]
        json: bool,

        /// Continue past pages whose text cannot be decoded
        #[arg(long)]
        lenient: bool,

        /// Only show the first 1000 characters
        #[arg(long)]
        preview: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Export text to PDF
    Render {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, value_name = "FILE", default_value = RenderedDocument::FILE_NAME)]
        output: PathBuf,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Page size
        #[arg(long, value_enum, default_value = "a4")]
        page_size: PageFormat,
    },

    /// List the available legal tasks
    Tasks,

    /// Ask the assistant
    Ask {
        /// Task to perform (draft, research, client-qa, review, advice)
        #[arg(short, long, default_value = "advice")]
        task: LegalTask,

        /// Your request or question
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// PDF to review (review task only)
        #[arg(short, long, value_name = "PDF")]
        document: Option<PathBuf>,

        /// Save a drafted document as PDF (draft task only)
        #[arg(
            long,
            value_name = "FILE",
            num_args = 0..=1,
            default_missing_value = RenderedDocument::FILE_NAME
        )]
        save_pdf: Option<PathBuf>,

        /// Groq API key
        #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Model name
        #[arg(long, env = "PARALEGAL_MODEL", default_value = DEFAULT_MODEL)]
        model: String,

        /// API base URL
        #[arg(long, env = "PARALEGAL_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageFormat {
    /// ISO A4
    A4,
    /// US Letter
    Letter,
}

impl From<PageFormat> for PageSize {
    fn from(format: PageFormat) -> Self {
        match format {
            PageFormat::A4 => PageSize::A4,
            PageFormat::Letter => PageSize::Letter,
        }
    }
}

fn main() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            json,
            lenient,
            preview,
        }) => cmd_extract(&input, output.as_deref(), json, lenient, preview),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Render {
            input,
            output,
            title,
            page_size,
        }) => cmd_render(input.as_deref(), &output, title, page_size),
        Some(Commands::Tasks) => {
            cmd_tasks();
            Ok(())
        }
        Some(Commands::Ask {
            task,
            query,
            document,
            save_pdf,
            api_key,
            model,
            base_url,
        }) => cmd_ask(AskArgs {
            task,
            query: query.unwrap_or_default(),
            document,
            save_pdf,
            config: GroqConfig::new(api_key.unwrap_or_default())
                .with_model(model)
                .with_base_url(base_url),
        }),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: paralegal <COMMAND>".yellow());
            println!("       paralegal --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read a PDF from disk under the upload ceiling.
fn load_document(path: &Path, lenient: bool) -> Result<ExtractedText, Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    let options = if lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new()
    };

    let extracted = accept_upload_with_options(&data, options)?;
    if extracted.is_blank() {
        eprintln!(
            "{} no text found in {} ({} pages); scanned documents are not supported",
            "Warning:".yellow().bold(),
            path.display(),
            extracted.page_count
        );
    }
    Ok(extracted)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    lenient: bool,
    show_preview: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut extracted = load_document(input, lenient)?;
    if show_preview {
        extracted.text = preview(&extracted.text, PREVIEW_CHARS);
    }

    let content = if json {
        extracted.to_json(true)?
    } else {
        extracted.text.clone()
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!(
            "{} {} ({} pages)",
            "Saved to".green(),
            path.display(),
            extracted.page_count
        );
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient so metadata is shown even when some page text is unreadable
    let parser = PdfParser::open_with_options(input, ParseOptions::new().lenient())?;
    let metadata = parser.metadata();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), metadata.pdf_version);
    println!("{}: {}", "Pages".bold(), metadata.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if metadata.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref producer) = metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let extracted = parser.extract()?;
    println!("{}: {}", "Words".bold(), extracted.word_count());
    println!("{}: {}", "Characters".bold(), extracted.char_count());

    Ok(())
}

fn cmd_render(
    input: Option<&Path>,
    output: &Path,
    title: Option<String>,
    page_size: PageFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut options = RenderOptions::new().with_page_size(page_size.into());
    if let Some(title) = title {
        options = options.with_title(title);
    }

    let pdf = render_with_options(&text, &options);
    pdf.write_to(output)?;

    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        output.display(),
        pdf.len()
    );
    Ok(())
}

fn cmd_tasks() {
    println!("{}", "Legal Tasks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for task in LegalTask::ALL {
        println!("{} {}", format!("{:<10}", task.slug()).green().bold(), task.label().bold());
        println!("           {}", task.instructions().dimmed());
    }
}

struct AskArgs {
    task: LegalTask,
    query: String,
    document: Option<PathBuf>,
    save_pdf: Option<PathBuf>,
    config: GroqConfig,
}

fn cmd_ask(args: AskArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.save_pdf.is_some() && !args.task.exports_pdf() {
        return Err(format!("--save-pdf is only available for the {} task", LegalTask::Draft).into());
    }

    let document = match args.document.as_deref() {
        Some(_) if !args.task.accepts_document() => {
            return Err(format!("--document is only used by the {} task", LegalTask::Review).into());
        }
        Some(path) => {
            let extracted = load_document(path, false)?;
            println!(
                "{} PDF loaded ({} pages)",
                "✓".green().bold(),
                extracted.page_count
            );
            Some(extracted)
        }
        None => None,
    };

    if args.config.api_key.trim().is_empty() {
        return Err("GROQ_API_KEY is not set (use --api-key, the environment or .env.local)".into());
    }

    let client = GroqClient::new(args.config)?;
    log::info!("Using model {}", client.model());
    let assistant = Assistant::new(client);
    let mut session = Session::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing legal data...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = assistant.generate(&mut session, args.task, &args.query, document.as_ref());
    spinner.finish_and_clear();
    let response = result?;

    println!("{}", "AI Legal Assistant Analysis".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", response);
    println!();
    println!("{}", DISCLAIMER.dimmed());

    if let Some(path) = args.save_pdf {
        let pdf = export_draft(&session, &RenderOptions::new())?;
        pdf.write_to(&path)?;
        println!("{} {}", "Saved to".green(), path.display());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "paralegal".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("AI legal assistant");
    println!();
    println!("License: MIT");
}

use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use memoz::api::MemoApi;
use memoz::commands::{CmdMessage, CmdResult, MessageLevel};
use memoz::config::MemozConfig;
use memoz::error::{MemozError, Result};
use memoz::model::{Color as MemoColor, Memo, MemoPatch};
use memoz::query::{Filter, SortKey};
use memoz::store::fs::FileBackend;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MemoApi<FileBackend>,
    config: MemozConfig,
    home: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }
    let mut ctx = init_context(&cli)?;
    print_messages(&ctx.api.take_startup_messages());

    match cli.command {
        Some(Commands::New { title, content }) => handle_new(&mut ctx, title, content),
        Some(Commands::List {
            search,
            filter,
            sort,
        }) => handle_list(&ctx, search, filter, sort),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Preview { id }) => handle_preview(&ctx, id),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, id, title, content),
        Some(Commands::Dup { id }) => handle_dup(&mut ctx, id),
        Some(Commands::Pin { id }) => print_result(ctx.api.toggle_pin(id)?),
        Some(Commands::Fav { id }) => print_result(ctx.api.toggle_favorite(id)?),
        Some(Commands::Archive { id }) => print_result(ctx.api.toggle_archive(id)?),
        Some(Commands::Tag { id, tags }) => print_result(ctx.api.add_tags(id, &tags)?),
        Some(Commands::Untag { id, tags }) => print_result(ctx.api.remove_tags(id, &tags)?),
        Some(Commands::Color { id, color, clear }) => handle_color(&mut ctx, id, color, clear),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Export { id, dir }) => handle_export(&ctx, id, dir),
        Some(Commands::Save) => {
            let result = ctx.api.save_now();
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = match cli
        .home
        .clone()
        .or_else(|| std::env::var_os("MEMOZ_HOME").map(PathBuf::from))
    {
        Some(path) => path,
        None => {
            let proj_dirs = ProjectDirs::from("com", "memoz", "memoz")
                .ok_or_else(|| MemozError::Storage("Could not determine data dir".to_string()))?;
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = MemozConfig::load(&home).unwrap_or_default();
    let api = MemoApi::open(FileBackend::new(&home));

    Ok(AppContext { api, config, home })
}

fn handle_new(ctx: &mut AppContext, title: Option<String>, content: Option<String>) -> Result<()> {
    let result = ctx
        .api
        .create(title.unwrap_or_default(), content.unwrap_or_default())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    search: Option<String>,
    filter: Option<String>,
    sort: Option<String>,
) -> Result<()> {
    let filter = match filter {
        Some(s) => s.parse::<Filter>().map_err(MemozError::Api)?,
        None => ctx.config.filter(),
    };
    let sort = match sort {
        Some(s) => s.parse::<SortKey>().map_err(MemozError::Api)?,
        None => ctx.config.sort(),
    };

    let result = ctx.api.list(&search.unwrap_or_default(), filter, sort)?;
    print_memos(&result.listed_memos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.view(id)?;
    for memo in &result.affected_memos {
        println!(
            "{} {}",
            memo.id.to_string().yellow(),
            display_title(memo).bold()
        );
        println!("--------------------------------");
        println!("{}", memo.content);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_preview(ctx: &AppContext, id: u64) -> Result<()> {
    let result = ctx.api.preview(id)?;
    if let Some(html) = &result.rendered_html {
        println!("{}", html);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let patch = MemoPatch { title, content };
    let result = ctx.api.edit(id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_dup(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.duplicate(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_color(
    ctx: &mut AppContext,
    id: u64,
    color: Option<String>,
    clear: bool,
) -> Result<()> {
    let color = match (color, clear) {
        (Some(name), _) => Some(name.parse::<MemoColor>().map_err(MemozError::Api)?),
        (None, true) => None,
        (None, false) => {
            return Err(MemozError::Api(
                "Provide a color name or --clear".to_string(),
            ))
        }
    };
    let result = ctx.api.set_color(id, color)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u64, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete memo {}? This cannot be undone", id))? {
        println!("Aborted.");
        return Ok(());
    }
    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, id: u64, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(d) => d,
        None => std::env::current_dir().map_err(MemozError::Io)?,
    };
    let result = ctx.api.export(id, &dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (k, v) in ctx.config.list_all() {
                println!("{} = {}", k, v);
            }
        }
        (Some(k), None) => match ctx.config.get(&k) {
            Some(v) => println!("{} = {}", k, v),
            None => println!("Unknown config key: {}", k),
        },
        (Some(k), Some(v)) => {
            ctx.config.set(&k, &v)?;
            ctx.config.save(&ctx.home)?;
            println!("{} = {}", k, v);
        }
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush().map_err(MemozError::Io)?;
    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(MemozError::Io)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

fn print_result(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PIN_MARKER: &str = "⚲";
const FAV_MARKER: &str = "★";

fn display_title(memo: &Memo) -> &str {
    if memo.title.is_empty() {
        "Untitled memo"
    } else {
        &memo.title
    }
}

fn print_memos(memos: &[Memo]) {
    if memos.is_empty() {
        println!("No memos found.");
        return;
    }

    let mut last_was_pinned = false;
    for memo in memos {
        // Blank line between the pinned block and the rest.
        if last_was_pinned && !memo.pinned {
            println!();
        }
        last_was_pinned = memo.pinned;

        let left_prefix = if memo.pinned {
            format!("  {} ", PIN_MARKER)
        } else {
            "    ".to_string()
        };
        let idx_str = format!("{}. ", memo.id);

        let right_suffix = if memo.favorite {
            format!("{} ", FAV_MARKER)
        } else {
            "  ".to_string()
        };

        let content_preview: String = memo
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let mut title_content = display_title(memo).to_string();
        if !content_preview.is_empty() {
            title_content.push(' ');
            title_content.push_str(&content_preview);
        }
        for tag in &memo.tags {
            title_content.push_str(&format!(" #{}", tag));
        }

        let fixed_width =
            left_prefix.width() + idx_str.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let title_colored = match memo.color {
            Some(c) => title_display.color(tint(c)),
            None => title_display.normal(),
        };
        let time_colored = format_time_ago(memo.updated_at).dimmed();

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_str.yellow(),
            title_colored,
            " ".repeat(padding),
            right_suffix,
            time_colored
        );
    }
}

fn tint(color: MemoColor) -> Color {
    match color {
        MemoColor::Red => Color::Red,
        MemoColor::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        MemoColor::Yellow => Color::Yellow,
        MemoColor::Green => Color::Green,
        MemoColor::Blue => Color::Blue,
        MemoColor::Purple => Color::Magenta,
        MemoColor::Pink => Color::TrueColor {
            r: 255,
            g: 105,
            b: 180,
        },
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

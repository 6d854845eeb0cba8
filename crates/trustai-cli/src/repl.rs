//! Interactive REPL: translates lines into controller calls and prints the
//! outcomes.
//!
//! Dictation events arrive on a background task that shares the controller
//! behind a mutex; transcript updates print above the prompt while the user
//! keeps typing.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tokio::sync::Mutex;
use trustai_core::input::AnalysisInput;
use trustai_core::nav::{InputMode, View};
use trustai_infrastructure::{InputLoader, report_export};

use crate::controller::{AppController, NAV_PERFORMED, NAV_UNKNOWN, NavOutcome, VoiceUpdate};
use crate::helper::CliHelper;
use crate::render;

const BUSY_NOTICE: &str = "A request is already in progress. Please wait for it to finish.";

pub async fn run(mut controller: AppController) -> anyhow::Result<()> {
    let voice_events = controller.take_voice_events();
    let controller = Arc::new(Mutex::new(controller));

    if let Some(mut events) = voice_events {
        let voice_controller = Arc::clone(&controller);
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let update = voice_controller.lock().await.on_voice_event(event).await;
                match update {
                    Some(VoiceUpdate::Draft(text)) => {
                        println!("{}", format!("[dictation] {text}").bright_black());
                    }
                    Some(VoiceUpdate::Error(message)) => {
                        eprintln!("{}", message.red());
                    }
                    None => {}
                }
            }
        });
    }

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    render::welcome();

    loop {
        let prompt = {
            let c = controller.lock().await;
            prompt_for(&c)
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim().to_string();

                if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    // an empty line submits the dictated draft, if any
                    let mut c = controller.lock().await;
                    if c.view() == View::Analyzer
                        && !c.is_listening()
                        && !c.pending_input().is_empty()
                    {
                        let draft = c.pending_input().to_string();
                        submit_line(&mut c, &draft).await;
                    }
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let mut c = controller.lock().await;
                if let Some(rest) = trimmed.strip_prefix('?') {
                    run_nav(&mut c, rest.trim()).await;
                } else if trimmed.starts_with('/') {
                    run_command(&mut c, &trimmed).await;
                } else {
                    handle_plain(&mut c, &trimmed).await;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // release the transcriber process if dictation is still running
    controller.lock().await.stop_dictation().await;
    Ok(())
}

fn prompt_for(controller: &AppController) -> String {
    let mut prompt = match controller.view() {
        View::Analyzer => format!(
            "{}:{}",
            View::Analyzer.as_str(),
            controller.input_mode().as_str()
        ),
        other => other.as_str().to_string(),
    };
    if controller.is_listening() {
        prompt.push_str(" (listening)");
    }
    format!("{prompt} >> ")
}

async fn handle_plain(controller: &mut AppController, line: &str) {
    match controller.view() {
        View::Analyzer => {
            if controller.is_listening() {
                // manual edit; the next transcript event overwrites it
                controller.set_pending_input(line);
                println!(
                    "{}",
                    "Draft updated. Incoming dictation will overwrite manual edits.".bright_black()
                );
            } else {
                submit_line(controller, line).await;
            }
        }
        View::History => {
            println!(
                "{}",
                "Use /history <n> to open an entry, or /view analyzer to run a new analysis."
                    .yellow()
            );
        }
        _ => {
            println!(
                "{}",
                "Switch to the analyzer to submit content: /view analyzer".yellow()
            );
        }
    }
}

async fn submit_line(controller: &mut AppController, line: &str) {
    if controller.is_busy() {
        println!("{}", BUSY_NOTICE.yellow());
        return;
    }
    println!("{}", format!("> {line}").green());

    let (input, source_name) = match controller.input_mode() {
        InputMode::Text => (AnalysisInput::text(line), None),
        InputMode::Url => (AnalysisInput::url(line), None),
        InputMode::Image => match InputLoader::load_image(Path::new(line)) {
            Ok(loaded) => (loaded.input, Some(loaded.file_name)),
            Err(error) => {
                println!("{}", error.to_string().yellow());
                return;
            }
        },
        InputMode::File => match InputLoader::load_text_file(Path::new(line)) {
            Ok(loaded) => (loaded.input, Some(loaded.file_name)),
            Err(error) => {
                println!("{}", error.to_string().yellow());
                return;
            }
        },
    };

    println!("{}", "Analyzing... this can take a few seconds.".bright_black());
    match controller.submit(input, source_name.as_deref()).await {
        Ok(()) => {
            if let Some(report) = controller.report() {
                render::report(report);
            }
            println!(
                "{}",
                "Ask follow-up questions with /chat <message>, save with /save, or /back for a \
                 new analysis."
                    .bright_black()
            );
        }
        Err(error) if error.is_invalid_input() => println!("{}", error.to_string().yellow()),
        Err(error) => eprintln!("{}", error.to_string().red()),
    }
}

async fn run_nav(controller: &mut AppController, command: &str) {
    if command.is_empty() {
        println!("{}", "Usage: ?<question or command>".yellow());
        return;
    }
    if let Some(greeting) = controller.nav_greeting() {
        println!("{}", greeting.bright_blue());
    }
    println!("{}", format!("> {command}").green());

    let view_before = controller.view();
    match controller.run_nav_command(command).await {
        NavOutcome::Performed => {
            println!("{}", NAV_PERFORMED.bright_blue());
            if controller.view() != view_before {
                render_view(controller);
            }
        }
        NavOutcome::Answer(response) => {
            for line in response.lines() {
                println!("{}", line.bright_blue());
            }
        }
        NavOutcome::NotUnderstood => println!("{}", NAV_UNKNOWN.bright_blue()),
    }
}

async fn run_command(controller: &mut AppController, line: &str) {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/help" => render::help(),
        "/view" => match rest.parse::<View>() {
            Ok(view) => {
                controller.go_to(view);
                render_view(controller);
            }
            Err(_) => println!(
                "{}",
                "Usage: /view <analyzer|learn|transparency|history>".yellow()
            ),
        },
        "/mode" => match rest.parse::<InputMode>() {
            Ok(mode) => {
                controller.set_input_mode(mode);
                println!(
                    "{}",
                    format!("Input mode set to {}.", mode.as_str()).bright_black()
                );
            }
            Err(_) => println!("{}", "Usage: /mode <text|url|image|file>".yellow()),
        },
        "/theme" => {
            let theme = controller.toggle_theme();
            println!(
                "{}",
                format!("Theme set to {}.", theme.as_str()).bright_black()
            );
        }
        "/history" => history_command(controller, rest),
        "/chat" => chat_command(controller, rest).await,
        "/voice" => voice_command(controller, rest).await,
        "/save" => save_command(controller, rest),
        "/show" => render_view(controller),
        "/back" => {
            controller.close_report();
            render_view(controller);
        }
        "/nav" => run_nav(controller, rest).await,
        other => println!(
            "{}",
            format!("Unknown command: {other}. Type /help for the list.").yellow()
        ),
    }
}

fn history_command(controller: &mut AppController, rest: &str) {
    if rest.is_empty() {
        controller.go_to(View::History);
        render::history_list(controller.history());
        return;
    }
    if rest == "clear" {
        match controller.clear_history() {
            Ok(()) => println!("{}", "History cleared.".bright_black()),
            Err(error) => eprintln!("{}", error.to_string().red()),
        }
        return;
    }
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => match controller.open_history_entry(n - 1) {
            Ok(()) => render_view(controller),
            Err(error) => println!("{}", error.to_string().yellow()),
        },
        _ => println!("{}", "Usage: /history [n|clear]".yellow()),
    }
}

async fn chat_command(controller: &mut AppController, message: &str) {
    if message.is_empty() {
        println!("{}", "Usage: /chat <message>".yellow());
        return;
    }
    if controller.report().is_none() {
        println!(
            "{}",
            "There is no report to discuss yet. Run an analysis first.".yellow()
        );
        return;
    }
    if controller.is_busy() {
        println!("{}", BUSY_NOTICE.yellow());
        return;
    }
    if let Some(greeting) = controller.chat_greeting() {
        println!("{}", greeting.bright_blue());
    }
    println!("{}", format!("> {message}").green());
    match controller.chat(message).await {
        Ok(reply) => {
            for line in reply.lines() {
                println!("{}", line.bright_blue());
            }
        }
        Err(error) => println!("{}", error.to_string().yellow()),
    }
}

async fn voice_command(controller: &mut AppController, rest: &str) {
    match rest {
        "" => {
            if controller.is_listening() {
                println!(
                    "{}",
                    "Dictation is already running. Use /voice stop to finish.".yellow()
                );
                return;
            }
            match controller.start_dictation().await {
                Ok(()) => println!(
                    "{}",
                    "Listening... dictated text becomes the draft. Use /voice stop to finish."
                        .bright_black()
                ),
                Err(error) => println!("{}", error.to_string().yellow()),
            }
        }
        "stop" => {
            controller.stop_dictation().await;
            println!(
                "{}",
                "Dictation stopped. Press Enter on an empty line to submit the draft."
                    .bright_black()
            );
        }
        _ => println!("{}", "Usage: /voice [stop]".yellow()),
    }
}

fn save_command(controller: &AppController, rest: &str) {
    let Some(report) = controller.report() else {
        println!("{}", "No report to save. Run an analysis first.".yellow());
        return;
    };
    let dest = (!rest.is_empty()).then(|| Path::new(rest));
    match report_export::write_report(report, dest) {
        Ok(path) => println!(
            "{}",
            format!("Report saved to {}", path.display()).bright_black()
        ),
        Err(error) => eprintln!("{}", format!("Could not save the report: {error}").red()),
    }
}

fn render_view(controller: &AppController) {
    match controller.view() {
        View::Analyzer => match controller.report() {
            Some(report) => render::report(report),
            None => render::analyzer_intro(controller.input_mode(), controller.pending_input()),
        },
        View::Learn => render::learn(),
        View::Transparency => render::transparency(),
        View::History => render::history_list(controller.history()),
    }
}

//! Interactive terminal prompts.
//!
//! Both prompts read one line at a time from any async line source, so
//! tests can drive them from an in-memory buffer.

use anyhow::Result;
use itinera_runtime::confirm::{ConfirmationBroker, ConfirmationOptions};
use itinera_runtime::dialog::{DialogHost, DialogInput, DialogInputParser, DialogRenderer};
use itinera_runtime::onboarding::{FlagStore, Onboarding, OnboardingStep};
use tokio::io::{AsyncBufRead, Lines};
use tracing::debug;

/// Requests a confirmation and feeds terminal input to the dialog until it
/// is settled.
///
/// `q` and end of input dismiss the dialog.
pub async fn ask<R, B>(
    broker: &ConfirmationBroker,
    host: &mut DialogHost<R>,
    lines: &mut Lines<B>,
    options: ConfirmationOptions,
) -> Result<bool>
where
    R: DialogRenderer,
    B: AsyncBufRead + Unpin,
{
    let mut confirmation = broker.request_confirmation(options);
    host.pump();

    loop {
        tokio::select! {
            biased;

            outcome = &mut confirmation => {
                host.pump();
                return Ok(outcome);
            }
            line = lines.next_line() => {
                match line? {
                    None => {
                        debug!("Input closed, dismissing dialog");
                        broker.settle(false);
                    }
                    Some(line) => handle_line(broker, host, &line),
                }
            }
        }
        host.pump();
    }
}

fn handle_line<R: DialogRenderer>(broker: &ConfirmationBroker, host: &DialogHost<R>, line: &str) {
    match DialogInputParser::parse(line) {
        DialogInput::Event(event) => {
            if !host.dispatch(event.clone()) {
                debug!(?event, "Input did not settle the dialog");
            }
        }
        DialogInput::Quit => {
            broker.settle(false);
        }
        DialogInput::Empty => {}
        DialogInput::Unknown { input } => {
            eprintln!("Unknown input: {input} (y = confirm, n = cancel, esc, b = backdrop)");
        }
    }
}

/// How an onboarding session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingExit {
    Finished,
    Skipped,
    /// Left without finishing; the carousel shows again next time.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselInput {
    Next,
    Back,
    Skip,
    Quit,
    Unknown,
}

fn parse_carousel_input(line: &str) -> CarouselInput {
    match line.trim().to_lowercase().as_str() {
        "" | "n" | "next" => CarouselInput::Next,
        "b" | "back" | "p" | "prev" => CarouselInput::Back,
        "s" | "skip" => CarouselInput::Skip,
        "q" | "quit" | "exit" => CarouselInput::Quit,
        _ => CarouselInput::Unknown,
    }
}

fn print_slide<S: FlagStore>(onboarding: &Onboarding<S>) {
    let carousel = onboarding.carousel();
    let Some(slide) = carousel.current() else {
        return;
    };
    let (pos, total) = carousel.progress();
    eprintln!();
    eprintln!("  [{pos}/{total}] {}", slide.title);
    eprintln!("    {}", slide.body);
    let next = if carousel.is_last() { "finish" } else { "next" };
    eprintln!("  [enter] {next}   [b] back   [s] skip   [q] quit");
}

/// Steps through the carousel from terminal input.
pub async fn run_onboarding<S, B>(
    onboarding: &mut Onboarding<S>,
    lines: &mut Lines<B>,
) -> Result<OnboardingExit>
where
    S: FlagStore,
    B: AsyncBufRead + Unpin,
{
    if onboarding.carousel().is_empty() {
        onboarding.finish()?;
        return Ok(OnboardingExit::Finished);
    }

    print_slide(onboarding);
    while let Some(line) = lines.next_line().await? {
        match parse_carousel_input(&line) {
            CarouselInput::Next => {
                if onboarding.advance()? == OnboardingStep::Finished {
                    return Ok(OnboardingExit::Finished);
                }
            }
            CarouselInput::Back => {
                onboarding.carousel_mut().prev();
            }
            CarouselInput::Skip => {
                onboarding.skip()?;
                return Ok(OnboardingExit::Skipped);
            }
            CarouselInput::Quit => return Ok(OnboardingExit::Quit),
            CarouselInput::Unknown => {
                eprintln!("Unknown input: {}", line.trim());
                continue;
            }
        }
        print_slide(onboarding);
    }

    Ok(OnboardingExit::Quit)
}

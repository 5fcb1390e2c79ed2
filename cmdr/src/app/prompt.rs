// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The interactive questions the app asks. They sit behind the [`Prompt`] trait so
//! that the conversion flow can be driven from a script in tests, and so that nothing
//! inside `hexconv_core` ever has to wait on a user.

use r3bl_tui::{DefaultIoDevices, ReadlineAsyncContext, ReadlineEvent, choose, height,
               readline_async::{HowToChoose, StyleSheet}};

use crate::{CmdrError, CmdrResult, ui_str};

pub trait Prompt {
    /// Ask for one line of text. `Ok(None)` means the user closed the input (or
    /// interrupted it) without answering.
    ///
    /// # Errors
    ///
    /// Returns [`CmdrError::ReadPrompt`] if the terminal can't be read or written.
    #[allow(async_fn_in_trait)]
    async fn ask(&mut self, question: &str) -> CmdrResult<Option<String>>;

    /// Ask a yes / no question. Anything other than an explicit yes is a no.
    ///
    /// # Errors
    ///
    /// Returns [`CmdrError::ReadPrompt`] if the terminal can't be read or written.
    #[allow(async_fn_in_trait)]
    async fn confirm(&mut self, question: &str) -> CmdrResult<bool>;
}

/// [`Prompt`] on the user's terminal. Text is read with [`ReadlineAsyncContext`], and
/// confirmation is a single select [`choose`] between [`ui_str::YES`] and
/// [`ui_str::NO`].
///
/// When the terminal is not interactive (piped, or in CI) nothing is shown: questions
/// get no answer, and confirmations are a no.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    async fn ask(&mut self, question: &str) -> CmdrResult<Option<String>> {
        let prompt_text = ui_str::readline_prompt(question);

        let Some(mut rl_ctx) = ReadlineAsyncContext::try_new(Some(&prompt_text), None)
            .await
            .map_err(CmdrError::read_prompt)?
        else {
            tracing::debug!(message = "Terminal is not interactive, no answer", question);
            return Ok(None);
        };

        // The loop is just to handle the resize event.
        let maybe_answer = loop {
            match rl_ctx.read_line().await.map_err(CmdrError::read_prompt)? {
                ReadlineEvent::Line(answer) => break Some(answer),
                ReadlineEvent::Eof | ReadlineEvent::Interrupted => break None,
                ReadlineEvent::Resized(_)
                | ReadlineEvent::Tab
                | ReadlineEvent::BackTab
                | ReadlineEvent::PageUp
                | ReadlineEvent::PageDown
                | ReadlineEvent::Insert
                | ReadlineEvent::FnKey(_)
                | ReadlineEvent::UnhandledKey(_) => { /* Do nothing */ }
            }
        };

        rl_ctx
            .request_shutdown(None)
            .await
            .map_err(CmdrError::read_prompt)?;
        rl_ctx.await_shutdown().await;

        Ok(maybe_answer)
    }

    async fn confirm(&mut self, question: &str) -> CmdrResult<bool> {
        let options = &[ui_str::YES, ui_str::NO];
        let mut default_io_devices = DefaultIoDevices::default();
        let maybe_user_choice = choose(
            question,
            options,
            Some(height(2)),
            None,
            HowToChoose::Single,
            StyleSheet::default(),
            default_io_devices.as_mut_tuple(),
        )
        .await
        .map_err(CmdrError::read_prompt)?
        .into_iter()
        .next();

        Ok(is_yes(maybe_user_choice.as_deref()))
    }
}

/// Only the [`ui_str::YES`] option confirms. Nothing picked (Esc, or no terminal) is a
/// no.
fn is_yes(maybe_choice: Option<&str>) -> bool { maybe_choice == Some(ui_str::YES) }

//! Interactive menu
//!
//! Reads one numeric choice per round and dispatches to the matching task.
//! `1`-`4` run a task and come back to the menu; `5` exits; anything else
//! prints an invalid-choice line and re-prompts.

use std::sync::Arc;

use tracing::debug;

use crate::error::ApplicationError;
use crate::ports::ConsolePort;
use crate::services::TaskService;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Task 1: text to speech
    TextToSpeech,
    /// Task 2: text translation with spoken playback
    TextTranslate,
    /// Task 3: voice translation
    VoiceTranslate,
    /// Task 4: speech to text
    SpeechToText,
    /// Leave the program
    Exit,
}

impl MenuChoice {
    /// Parse a line of user input into a choice
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::TextToSpeech),
            "2" => Some(Self::TextTranslate),
            "3" => Some(Self::VoiceTranslate),
            "4" => Some(Self::SpeechToText),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The top-level menu loop
pub struct MenuLoop {
    service: TaskService,
    console: Arc<dyn ConsolePort>,
}

impl std::fmt::Debug for MenuLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuLoop")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

impl MenuLoop {
    /// Create a menu over a task service
    pub fn new(service: TaskService, console: Arc<dyn ConsolePort>) -> Self {
        Self { service, console }
    }

    /// Run until the user selects exit
    ///
    /// # Errors
    ///
    /// Returns an error when console input fails or when one of the
    /// unguarded tasks (text-to-speech, text translation) fails; the
    /// guarded tasks report their own failures and keep the loop alive.
    pub async fn run(&self) -> Result<(), ApplicationError> {
        loop {
            self.print_menu();
            let input = self.console.prompt("Select an option (1-5): ")?;

            match MenuChoice::parse(&input) {
                Some(MenuChoice::TextToSpeech) => self.service.text_to_speech().await?,
                Some(MenuChoice::TextTranslate) => self.service.text_translate().await?,
                Some(MenuChoice::VoiceTranslate) => self.service.voice_translate().await?,
                Some(MenuChoice::SpeechToText) => self.service.speech_to_text().await?,
                Some(MenuChoice::Exit) => {
                    self.console.say("Exiting... Goodbye!");
                    return Ok(());
                },
                None => {
                    debug!(input = %input, "Invalid menu choice");
                    self.console.say("Invalid choice. Please select again.");
                },
            }
        }
    }

    fn print_menu(&self) {
        self.console
            .say("\n========== Universal Voice Translator ==========");
        self.console.say(" 1. Text to speech");
        self.console.say(" 2. Translate text");
        self.console.say(" 3. Voice translation");
        self.console.say(" 4. Speech to text");
        self.console.say(" 5. Exit");
        self.console
            .say("================================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{
        MockConsolePort, MockPlaybackPort, MockSpeechRecognitionPort, MockSpeechSynthesisPort,
        MockTranslationPort, SynthesisResult,
    };
    use crate::services::TaskConfig;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    mod parsing {
        use super::*;

        #[test]
        fn parses_valid_choices() {
            assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::TextToSpeech));
            assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::TextTranslate));
            assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::VoiceTranslate));
            assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::SpeechToText));
            assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        }

        #[test]
        fn trims_whitespace() {
            assert_eq!(MenuChoice::parse("  3 \n"), Some(MenuChoice::VoiceTranslate));
        }

        #[test]
        fn rejects_everything_else() {
            assert_eq!(MenuChoice::parse(""), None);
            assert_eq!(MenuChoice::parse("0"), None);
            assert_eq!(MenuChoice::parse("6"), None);
            assert_eq!(MenuChoice::parse("12"), None);
            assert_eq!(MenuChoice::parse("one"), None);
            assert_eq!(MenuChoice::parse("exit"), None);
        }
    }

    mod dispatch {
        use super::*;

        /// Console replaying scripted answers, recording everything said
        fn scripted_console(replies: &[&str]) -> (MockConsolePort, Arc<Mutex<Vec<String>>>) {
            let mut console = MockConsolePort::new();

            let queue = Arc::new(Mutex::new(
                replies.iter().map(|r| (*r).to_string()).collect::<VecDeque<_>>(),
            ));
            console.expect_prompt().returning(move |_| {
                queue.lock().unwrap().pop_front().ok_or_else(|| {
                    ApplicationError::Internal("scripted input exhausted".to_string())
                })
            });

            let said = Arc::new(Mutex::new(Vec::new()));
            let said_sink = Arc::clone(&said);
            console.expect_say().returning(move |message| {
                said_sink.lock().unwrap().push(message.to_string());
            });

            (console, said)
        }

        fn menu_with(
            translation: MockTranslationPort,
            synthesis: MockSpeechSynthesisPort,
            recognition: MockSpeechRecognitionPort,
            playback: MockPlaybackPort,
            console: MockConsolePort,
            output_dir: std::path::PathBuf,
        ) -> MenuLoop {
            let console = Arc::new(console);
            let service = TaskService::with_config(
                Arc::new(translation),
                Arc::new(synthesis),
                Arc::new(recognition),
                Arc::new(playback),
                Arc::clone(&console) as Arc<dyn ConsolePort>,
                TaskConfig {
                    output_dir,
                    ..TaskConfig::default()
                },
            );
            MenuLoop::new(service, console)
        }

        #[tokio::test]
        async fn exit_terminates_with_goodbye() {
            let (console, said) = scripted_console(&["5"]);
            let menu = menu_with(
                MockTranslationPort::new(),
                MockSpeechSynthesisPort::new(),
                MockSpeechRecognitionPort::new(),
                MockPlaybackPort::new(),
                console,
                std::env::temp_dir(),
            );

            menu.run().await.unwrap();

            let said = said.lock().unwrap();
            assert!(said.iter().any(|m| m.contains("Goodbye")));
        }

        #[tokio::test]
        async fn invalid_input_reprompts_without_dispatching() {
            let (console, said) = scripted_console(&["9", "banana", "5"]);
            let mut translation = MockTranslationPort::new();
            let mut synthesis = MockSpeechSynthesisPort::new();
            let mut recognition = MockSpeechRecognitionPort::new();
            let mut playback = MockPlaybackPort::new();
            translation.expect_translate().times(0);
            synthesis.expect_synthesize().times(0);
            recognition.expect_recognize().times(0);
            playback.expect_play().times(0);

            let menu = menu_with(
                translation,
                synthesis,
                recognition,
                playback,
                console,
                std::env::temp_dir(),
            );

            menu.run().await.unwrap();

            let said = said.lock().unwrap();
            let invalid_count = said
                .iter()
                .filter(|m| m.contains("Invalid choice"))
                .count();
            assert_eq!(invalid_count, 2);
        }

        #[tokio::test]
        async fn choice_one_dispatches_text_to_speech() {
            let dir = tempfile::tempdir().unwrap();
            // Menu choice, then the task's two prompts, then exit
            let (console, _said) = scripted_console(&["1", "hello", "en", "5"]);

            let mut synthesis = MockSpeechSynthesisPort::new();
            synthesis.expect_synthesize().times(1).returning(|_, _| {
                Ok(SynthesisResult {
                    audio_data: vec![1],
                    file_extension: "wav".to_string(),
                })
            });
            let mut playback = MockPlaybackPort::new();
            playback.expect_play().times(1).returning(|_| Ok(()));

            let menu = menu_with(
                MockTranslationPort::new(),
                synthesis,
                MockSpeechRecognitionPort::new(),
                playback,
                console,
                dir.path().to_path_buf(),
            );

            menu.run().await.unwrap();
        }

        #[tokio::test]
        async fn choice_four_dispatches_speech_to_text() {
            let dir = tempfile::tempdir().unwrap();
            // Menu choice, decline the save prompt, then exit
            let (console, said) = scripted_console(&["4", "n", "5"]);

            let mut recognition = MockSpeechRecognitionPort::new();
            recognition
                .expect_recognize()
                .times(1)
                .returning(|_| Ok("dictated words".to_string()));

            let menu = menu_with(
                MockTranslationPort::new(),
                MockSpeechSynthesisPort::new(),
                recognition,
                MockPlaybackPort::new(),
                console,
                dir.path().to_path_buf(),
            );

            menu.run().await.unwrap();

            let said = said.lock().unwrap();
            assert!(said.iter().any(|m| m.contains("dictated words")));
        }

        #[tokio::test]
        async fn guarded_task_failure_keeps_menu_alive() {
            let dir = tempfile::tempdir().unwrap();
            let (console, said) = scripted_console(&["3", "5"]);

            let mut recognition = MockSpeechRecognitionPort::new();
            recognition.expect_recognize().returning(|_| {
                Err(crate::ports::RecognitionFailure::Unreachable(
                    "refused".to_string(),
                ))
            });

            let menu = menu_with(
                MockTranslationPort::new(),
                MockSpeechSynthesisPort::new(),
                recognition,
                MockPlaybackPort::new(),
                console,
                dir.path().to_path_buf(),
            );

            // The loop survives the failure and exits normally on "5"
            menu.run().await.unwrap();

            let said = said.lock().unwrap();
            assert!(said.iter().any(|m| m.starts_with("Error:")));
            assert!(said.iter().any(|m| m.contains("Goodbye")));
        }

        #[tokio::test]
        async fn unguarded_task_failure_escapes_the_loop() {
            let dir = tempfile::tempdir().unwrap();
            let (console, _said) = scripted_console(&["1", "hello", "en"]);

            let mut synthesis = MockSpeechSynthesisPort::new();
            synthesis.expect_synthesize().returning(|_, _| {
                Err(ApplicationError::ExternalService("down".to_string()))
            });

            let menu = menu_with(
                MockTranslationPort::new(),
                synthesis,
                MockSpeechRecognitionPort::new(),
                MockPlaybackPort::new(),
                console,
                dir.path().to_path_buf(),
            );

            let result = menu.run().await;
            assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
        }
    }
}

//! Result presentation and submission
//!
//! This module builds the read-only results view shown when the contest is
//! over, assembles the submission payload annotating every item with the
//! recorded selection, and defines the sink the payload is handed to. The
//! bundled [`HttpSink`] posts the payload once to a fixed endpoint with a
//! cross-site-request-forgery token header; there is no retry and no
//! recovery beyond logging.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use url::Url;

use crate::{
    contest::config::{Contest, ItemConfig},
    score::ScoreSheet,
};

/// Header carrying the cross-site-request-forgery token
const CSRF_HEADER: &str = "X-CSRFToken";

/// The final summary presented when the contest is over
#[derive(Debug, Serialize, Clone)]
pub struct SummaryMessage {
    /// Total points earned across the contest
    pub score: u64,
    /// One read-only card per question item
    pub review: Vec<ReviewEntry>,
}

/// One read-only results card for a question item
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub struct ReviewEntry {
    /// The prompt that was asked
    pub prompt: String,
    /// Text of the correct choice
    pub correct: String,
    /// Text of the recorded selection, absent when the item went unanswered
    pub selected: Option<String>,
}

/// Builds the final summary from the contest and the recorded selections
///
/// The summary is a pure function of its inputs: building it twice for
/// unchanged state yields the same output.
///
/// # Arguments
///
/// * `contest` - The contest configuration
/// * `sheet` - The recorded selections and accumulated score
///
/// # Returns
///
/// A `SummaryMessage` with one review card per question item
pub fn summarize(contest: &Contest, sheet: &ScoreSheet) -> SummaryMessage {
    SummaryMessage {
        score: sheet.total(),
        review: contest
            .items()
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                ItemConfig::Question(config) => Some(ReviewEntry {
                    prompt: config.prompt().to_owned(),
                    correct: config
                        .choices()
                        .get(config.correct())
                        .cloned()
                        .unwrap_or_default(),
                    selected: sheet
                        .answer(index)
                        .and_then(|answer| config.choices().get(answer.choice).cloned()),
                }),
                ItemConfig::Clip(_) => None,
            })
            .collect_vec(),
    }
}

/// The payload posted to the results endpoint
///
/// This is the full item collection annotated with each recorded selection,
/// matching what the contest page received plus what the participant did
/// with it.
#[derive(Debug, Serialize, Clone)]
pub struct Submission {
    /// The contest title
    pub title: String,
    /// Total points earned across the contest
    pub score: u64,
    /// Every item with its recorded selection, in contest order
    pub items: Vec<SubmittedItem>,
}

/// One annotated item in the submission payload
#[skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub enum SubmittedItem {
    /// A question item with the participant's selection
    Question {
        /// The prompt that was asked
        prompt: String,
        /// The ordered answer choices
        choices: Vec<String>,
        /// Index of the correct choice
        correct: usize,
        /// Points at stake on this question
        points: u64,
        /// Index of the recorded selection, absent when unanswered
        selected: Option<usize>,
        /// Points this selection earned, absent when unanswered
        earned: Option<u64>,
    },
    /// A clip item
    Clip {
        /// Identifier of the clip on the hosting service
        media: String,
        /// Snippet length in seconds
        snippet_seconds: u64,
    },
}

impl Submission {
    /// Assembles the submission payload from the contest and the selections
    ///
    /// # Arguments
    ///
    /// * `contest` - The contest configuration
    /// * `sheet` - The recorded selections and accumulated score
    pub fn assemble(contest: &Contest, sheet: &ScoreSheet) -> Self {
        Self {
            title: contest.title().to_owned(),
            score: sheet.total(),
            items: contest
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    ItemConfig::Question(config) => {
                        let answer = sheet.answer(index);
                        SubmittedItem::Question {
                            prompt: config.prompt().to_owned(),
                            choices: config.choices().to_vec(),
                            correct: config.correct(),
                            points: config.points(),
                            selected: answer.map(|answer| answer.choice),
                            earned: answer.map(|answer| answer.earned),
                        }
                    }
                    ItemConfig::Clip(config) => SubmittedItem::Clip {
                        media: config.media().id().to_owned(),
                        snippet_seconds: config.snippet().as_secs(),
                    },
                })
                .collect_vec(),
        }
    }
}

/// The response the results endpoint answers with
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubmissionResponse {
    /// Location to navigate to, when the endpoint wants a redirect
    pub redirect: Option<String>,
}

/// Errors handing a submission to a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The transport failed or the response body was not understood
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Trait for delivering the submission payload
///
/// This trait abstracts the delivery mechanism so the controller stays free
/// of transport concerns. Tests substitute a recording sink.
pub trait ResultSink {
    /// Delivers the submission payload
    ///
    /// # Arguments
    ///
    /// * `submission` - The assembled payload
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when delivery fails; the caller logs it and
    /// moves on.
    fn submit(&self, submission: &Submission) -> Result<SubmissionResponse, SinkError>;
}

/// Submission sink posting the payload to the results endpoint
///
/// One POST with a JSON body and the cross-site-request-forgery token
/// header. No timeout tuning, no retry.
pub struct HttpSink {
    /// The underlying HTTP client
    client: reqwest::blocking::Client,
    /// The results endpoint
    endpoint: Url,
    /// Token copied into the forgery-protection header
    csrf_token: String,
}

impl std::fmt::Debug for HttpSink {
    /// Custom debug implementation that avoids printing the token
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSink")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl HttpSink {
    /// Creates a sink posting to the given endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The results endpoint
    /// * `csrf_token` - The page's forgery-protection token
    pub fn new(endpoint: Url, csrf_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            csrf_token: csrf_token.into(),
        }
    }
}

impl ResultSink for HttpSink {
    fn submit(&self, submission: &Submission) -> Result<SubmissionResponse, SinkError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CSRF_HEADER, &self.csrf_token)
            .json(submission)
            .send()?;

        Ok(response.json()?)
    }
}

//! Stateful debate sessions.
//!
//! A session owns the transcript and the round counter, and drives one
//! full exchange per student argument: counterargument, coaching feedback
//! and strength analysis are requested concurrently, then folded into the
//! transcript as an annotated message pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::coach::{
    DebateCoach, DebateContext, DebatePosition, Personality, StrengthAssessment,
};
use crate::error::SessionError;
use crate::scorer::{ArgumentAnalyzer, ScoreResult};

/// Number of argument rounds in a full debate.
pub const MAX_ROUNDS: u32 = 5;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The student practicing.
    User,
    /// The AI sparring partner.
    Opponent,
}

/// One message in the debate transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Who authored the message.
    pub sender: Sender,
    /// Message text.
    pub content: String,
    /// When the message was recorded.
    pub timestamp: DateTime<Utc>,
    /// Coaching annotation attached to student messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    /// Strength score attached to student messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

impl DebateMessage {
    /// Creates a student message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_sender(Sender::User, content)
    }

    /// Creates a sparring partner message.
    pub fn opponent(content: impl Into<String>) -> Self {
        Self::with_sender(Sender::Opponent, content)
    }

    fn with_sender(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
            feedback: None,
            score: None,
        }
    }

    /// Attaches a coaching annotation.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }

    /// Attaches a strength score.
    pub fn with_score(mut self, score: u8) -> Self {
        self.score = Some(score);
        self
    }
}

/// Everything produced by one student argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeOutcome {
    /// The student's message with feedback and score attached.
    pub user_message: DebateMessage,
    /// The partner's counterargument.
    pub opponent_message: DebateMessage,
    /// The model's strength judgement.
    pub assessment: StrengthAssessment,
    /// The instant heuristic score computed locally.
    pub local_score: ScoreResult,
}

/// A single debate between a student and one sparring partner.
pub struct DebateSession {
    /// Coach executing the LLM-backed operations.
    coach: DebateCoach,
    /// Local analyzer for instant scoring.
    analyzer: ArgumentAnalyzer,
    /// Topic under debate.
    topic: String,
    /// The sparring partner's personality.
    personality: Personality,
    /// Side argued by the student.
    user_position: DebatePosition,
    /// Current round, 0 until the debate is opened.
    round: u32,
    /// Transcript, oldest first.
    messages: Vec<DebateMessage>,
}

impl DebateSession {
    /// Creates a session with the default analyzer.
    pub fn new(
        coach: DebateCoach,
        topic: impl Into<String>,
        personality: Personality,
        user_position: DebatePosition,
    ) -> Self {
        Self::with_analyzer(
            coach,
            ArgumentAnalyzer::new(),
            topic,
            personality,
            user_position,
        )
    }

    /// Creates a session with an explicit analyzer.
    pub fn with_analyzer(
        coach: DebateCoach,
        analyzer: ArgumentAnalyzer,
        topic: impl Into<String>,
        personality: Personality,
        user_position: DebatePosition,
    ) -> Self {
        Self {
            coach,
            analyzer,
            topic: topic.into(),
            personality,
            user_position,
            round: 0,
            messages: Vec::new(),
        }
    }

    /// Topic under debate.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The sparring partner's personality.
    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Side argued by the student.
    pub fn user_position(&self) -> DebatePosition {
        self.user_position
    }

    /// Current round. 0 before the debate opens, then 1-based.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Transcript so far, oldest first.
    pub fn messages(&self) -> &[DebateMessage] {
        &self.messages
    }

    /// Whether the debate has been opened.
    pub fn has_started(&self) -> bool {
        self.round > 0
    }

    /// Whether all rounds have been played.
    pub fn is_finished(&self) -> bool {
        self.round > MAX_ROUNDS
    }

    /// Opens the debate: the partner speaks first with its opening
    /// statement, and round 1 begins.
    pub async fn open(&mut self) -> Result<DebateMessage, SessionError> {
        if self.has_started() {
            return Err(SessionError::AlreadyStarted);
        }

        let opening = self
            .coach
            .generate_opening_statement(
                &self.topic,
                self.user_position.opposite(),
                &self.personality,
            )
            .await;

        let message = DebateMessage::opponent(opening);
        self.messages.push(message.clone());
        self.round = 1;

        Ok(message)
    }

    /// Plays one round: the student's argument goes in, and the
    /// counterargument, coaching feedback and strength analysis come back
    /// together.
    ///
    /// The three coach calls run concurrently since none depends on
    /// another's output.
    pub async fn submit_argument(
        &mut self,
        argument: &str,
    ) -> Result<ExchangeOutcome, SessionError> {
        if !self.has_started() {
            return Err(SessionError::NotStarted);
        }
        if self.is_finished() {
            return Err(SessionError::DebateFinished(MAX_ROUNDS));
        }
        if argument.trim().is_empty() {
            return Err(SessionError::EmptyArgument);
        }

        let previous: Vec<String> = self.messages.iter().map(|m| m.content.clone()).collect();
        let context = DebateContext::for_user(&self.topic, self.user_position, self.round)
            .with_previous_arguments(previous);

        let (reply, feedback, assessment) = tokio::join!(
            self.coach
                .generate_debate_response(&context, argument, &self.personality),
            self.coach.generate_feedback(argument, &self.topic, self.round),
            self.coach
                .analyze_argument_strength(argument, &self.topic, self.user_position),
        );

        let local_score = self.analyzer.analyze(argument);

        let annotation = format!(
            "{} | Stiprumas: {}/100 - {}",
            feedback, assessment.score, assessment.analysis
        );

        let user_message = DebateMessage::user(argument)
            .with_feedback(annotation)
            .with_score(assessment.score);
        let opponent_message = DebateMessage::opponent(reply);

        self.messages.push(user_message.clone());
        self.messages.push(opponent_message.clone());
        self.round += 1;

        Ok(ExchangeOutcome {
            user_message,
            opponent_message,
            assessment,
            local_score,
        })
    }

    /// Clears the transcript and round counter for a fresh debate.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.round = 0;
    }
}

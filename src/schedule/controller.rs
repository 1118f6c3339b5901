use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::locale::ScheduleLocale;
use super::matcher::GroupMatcher;
use super::render::{RenderedSchedule, ScheduleRenderer};
use super::token::NavigationToken;
use super::week::WeekWindow;
use super::ScheduleSource;
use crate::error::{Result, ScheduleError};
use crate::utils::markup::{bold, escape_html, underline};

/// Where a conversation stands after a reply. Nothing is stored; the state
/// is implied by the message and buttons the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Waiting for the user to type a group name.
    AwaitingGroupInput,
    /// A group was suggested and waits for yes/no.
    AwaitingGroupConfirmation,
    /// A week is shown with navigation buttons.
    BrowsingSchedule,
}

/// Suggestion shown after a free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Telegram HTML message body.
    pub markup_text: String,
    /// Confirm and cancel tokens, in button order.
    pub attached_tokens: Vec<NavigationToken>,
}

/// What the front-end should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Ask the user to confirm a suggested group.
    Confirmation(ConfirmationPrompt),
    /// Show (or replace the message with) a rendered week.
    Schedule(RenderedSchedule),
    /// Remove the message the button belonged to.
    Dismiss,
}

impl Reply {
    /// Conversation state the user ends up in after this reply.
    pub fn state(&self) -> ConversationState {
        match self {
            Reply::Confirmation(_) => ConversationState::AwaitingGroupConfirmation,
            Reply::Schedule(_) => ConversationState::BrowsingSchedule,
            Reply::Dismiss => ConversationState::AwaitingGroupInput,
        }
    }
}

/// Answers text messages and button presses without keeping any session.
///
/// Week offsets travel in the button tokens. The browsed group travels in
/// the message itself: the first line of a rendered schedule is the group
/// name, which the front-end hands back as `shown_group`.
pub struct NavigationController<S> {
    source: S,
    renderer: ScheduleRenderer,
    default_group: Option<String>,
    fixed_today: Option<NaiveDate>,
}

impl<S: ScheduleSource> NavigationController<S> {
    /// Creates a controller reading from `source` and rendering in `locale`.
    pub fn new(source: S, locale: ScheduleLocale) -> Self {
        Self {
            source,
            renderer: ScheduleRenderer::new(locale),
            default_group: None,
            fixed_today: None,
        }
    }

    /// Group to browse when a navigation button arrives without its message.
    pub fn with_default_group(mut self, group: Option<String>) -> Self {
        self.default_group = group;
        self
    }

    /// Pins "today" instead of reading the host clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    /// Vocabulary replies are written in.
    pub fn locale(&self) -> &ScheduleLocale {
        self.renderer.locale()
    }

    /// Storage backend the controller reads from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handles a typed group name by suggesting the best matching group.
    pub async fn handle_text(&self, input: &str) -> Result<Reply> {
        let groups = self.source.list_groups().await?;
        let candidates = GroupMatcher::search(input, &groups);
        debug!("Group search for '{}' produced {} candidates", input, candidates.len());

        let best = candidates
            .into_iter()
            .next()
            .ok_or_else(|| ScheduleError::NoMatch(input.trim().to_string()))?;

        let locale = self.locale();
        let markup_text = format!(
            "{} {}?\n\n{}: {}",
            locale.confirm_question,
            bold(&underline(&escape_html(&best.group_name))),
            locale.faculty_label,
            escape_html(&best.faculty)
        );

        Ok(Reply::Confirmation(ConfirmationPrompt {
            markup_text,
            attached_tokens: vec![
                NavigationToken::Confirm { group_id: best.group_id },
                NavigationToken::Cancel { group_id: best.group_id },
            ],
        }))
    }

    /// Handles button data. `shown_group` is the group name heading the
    /// message the button was attached to, if the front-end has it.
    pub async fn handle_token(&self, data: &str, shown_group: Option<&str>) -> Result<Reply> {
        match NavigationToken::decode(data)? {
            NavigationToken::Confirm { group_id } => {
                let group_name = self.source.resolve_group_name(group_id).await?;
                info!("Group {} ({}) confirmed", group_id, group_name);
                self.show_week(group_id, &group_name, 0).await
            }
            NavigationToken::Cancel { group_id } => {
                debug!("Suggestion of group {} rejected", group_id);
                Ok(Reply::Dismiss)
            }
            NavigationToken::Navigate { action, target, origin } => {
                let name = shown_group
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .or(self.default_group.as_deref())
                    .ok_or_else(|| ScheduleError::GroupNotFound("no group in message".to_string()))?;

                let group = self
                    .source
                    .find_group_by_name(name)
                    .await?
                    .ok_or_else(|| ScheduleError::GroupNotFound(name.to_string()))?;

                debug!("{:?} from week {} to week {} for {}", action, origin, target, group.name);
                self.show_week(group.id, &group.name, target).await
            }
        }
    }

    /// Renders week `offset` of `group_id`.
    pub async fn show_week(&self, group_id: i64, group_name: &str, offset: i32) -> Result<Reply> {
        let week = WeekWindow::from_today(self.today(), offset)?;
        let lessons = self.source.lookup_lessons(group_id, week.week_start).await?;
        if lessons.is_empty() {
            warn!("No lessons for group {} in week starting {}", group_id, week.week_start);
        }

        Ok(Reply::Schedule(self.renderer.render(&lessons, &week, group_name)))
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// First line of a rendered schedule's plain text, i.e. the group name.
pub fn group_from_message_text(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_states() {
        assert_eq!(Reply::Dismiss.state(), ConversationState::AwaitingGroupInput);
        let prompt = Reply::Confirmation(ConfirmationPrompt {
            markup_text: String::new(),
            attached_tokens: Vec::new(),
        });
        assert_eq!(prompt.state(), ConversationState::AwaitingGroupConfirmation);
    }

    #[test]
    fn test_group_from_message_text() {
        assert_eq!(
            group_from_message_text("М8О-207БВ-24\nпн ~ 19.10\nВыходной"),
            Some("М8О-207БВ-24")
        );
        assert_eq!(group_from_message_text("\n  G1 \nrest"), Some("G1"));
        assert_eq!(group_from_message_text(""), None);
    }
}

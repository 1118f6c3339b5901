use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::schedule::{NavAction, NavigationToken, ScheduleLocale};

/// Caption of the button for `token`.
pub fn button_label(token: &NavigationToken, locale: &ScheduleLocale) -> &'static str {
    match token {
        NavigationToken::Navigate { action: NavAction::Previous, .. } => "←",
        NavigationToken::Navigate { action: NavAction::Current, .. } => "🏠",
        NavigationToken::Navigate { action: NavAction::Next, .. } => "→",
        NavigationToken::Confirm { .. } => locale.confirm_button,
        NavigationToken::Cancel { .. } => locale.cancel_button,
    }
}

/// One row of buttons, one per token, in token order.
pub fn token_keyboard(tokens: &[NavigationToken], locale: &ScheduleLocale) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = tokens
        .iter()
        .map(|token| InlineKeyboardButton::callback(button_label(token, locale), token.encode()))
        .collect();

    InlineKeyboardMarkup::new(vec![row])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::render::navigation_tokens;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_navigation_row() {
        let keyboard = token_keyboard(&navigation_tokens(2), &ScheduleLocale::russian());
        assert_eq!(keyboard.inline_keyboard.len(), 1);

        let row = &keyboard.inline_keyboard[0];
        let labels: Vec<&str> = row.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["←", "🏠", "→"]);

        let data: Vec<String> = row
            .iter()
            .filter_map(|b| match &b.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(data, vec!["nav_prev:1:2", "nav_curr:0:2", "nav_next:3:2"]);
    }

    #[test]
    fn test_confirmation_labels_follow_locale() {
        let tokens = [
            NavigationToken::Confirm { group_id: 1 },
            NavigationToken::Cancel { group_id: 1 },
        ];
        let keyboard = token_keyboard(&tokens, &ScheduleLocale::english());
        let labels: Vec<&str> = keyboard.inline_keyboard[0].iter().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec!["Yes", "No"]);
    }
}

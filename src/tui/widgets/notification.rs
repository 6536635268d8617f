//! Toast notifications
//!
//! Short-lived messages drawn over the top-right corner. They expire on the
//! tick after their time-to-live runs out.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Longest a toast stays up, whatever the configured time-to-live
pub const MAX_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Kind of notice, which picks its color and title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

impl NoticeKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notification {
    pub fn new(kind: NoticeKind, message: impl Into<String>, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            message: message.into(),
            kind,
            expires_at: now + ttl.min(MAX_TTL),
        }
    }

    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self::new(NoticeKind::Success, message, ttl)
    }

    /// Whether the notification should be gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    background: Color,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, background: Color) -> Self {
        Self {
            notification,
            background,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(self.background));

        Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Where a toast goes inside `parent`: top-right, at most 36 columns wide
pub fn notification_area(parent: Rect) -> Rect {
    let width = parent.width.min(36);
    let height = parent.height.min(3);
    Rect::new(parent.x + parent.width - width, parent.y, width, height)
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop everything that expired before `now`
    pub fn remove_expired_at(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired_at(now));
    }

    /// The notification to draw, if any
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

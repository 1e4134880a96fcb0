//! "Task assigned" email rendering and the assignment notifier adapter.

use super::NotificationSender;
use crate::{
    notification::{domain::OutgoingEmail, ports::MailTransport},
    task::{
        domain::Task,
        ports::{AssignmentNotifier, AssignmentNotifierError, AssignmentRecipient},
    },
};
use async_trait::async_trait;
use minijinja::{Environment, context};

const TEXT_TEMPLATE_NAME: &str = "task_assigned.txt";
const HTML_TEMPLATE_NAME: &str = "task_assigned.html";

const TEXT_TEMPLATE: &str = "Hi {{ mentee_name }},

{{ mentor_name }} assigned you a new task: {{ title }}
{% if description %}
{{ description }}
{% endif %}
Priority: {{ priority }}
Category: {{ category }}
Due: {{ due_date }}
{% if estimated_time %}Estimated time: {{ estimated_time }}
{% endif %}";

const HTML_TEMPLATE: &str = "<p>Hi {{ mentee_name }},</p>
<p>{{ mentor_name }} assigned you a new task: <strong>{{ title }}</strong></p>
{% if description %}<p>{{ description }}</p>
{% endif %}<ul>
<li>Priority: {{ priority }}</li>
<li>Category: {{ category }}</li>
<li>Due: {{ due_date }}</li>
{% if estimated_time %}<li>Estimated time: {{ estimated_time }}</li>
{% endif %}</ul>";

/// Renders the "task assigned" email for a recipient.
///
/// The HTML body is auto-escaped.
///
/// # Errors
///
/// Returns [`AssignmentNotifierError`] when rendering fails or the
/// recipient address is invalid.
pub fn render_task_assigned(
    recipient: &AssignmentRecipient,
    task: &Task,
) -> Result<OutgoingEmail, AssignmentNotifierError> {
    let mut environment = Environment::new();
    environment
        .add_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE)
        .map_err(render_error)?;
    environment
        .add_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)
        .map_err(render_error)?;

    let due_date = task
        .due_date()
        .map_or_else(|| "N/A".to_owned(), |date| date.format("%Y-%m-%d").to_string());
    let ctx = context! {
        mentee_name => recipient.name.as_deref().unwrap_or("there"),
        mentor_name => task.mentor_name().unwrap_or("Your mentor"),
        title => task.title(),
        description => task.description(),
        priority => task.priority().label(),
        category => task.category().label(),
        due_date => due_date,
        estimated_time => task.estimated_time(),
    };

    let text = environment
        .get_template(TEXT_TEMPLATE_NAME)
        .and_then(|template| template.render(&ctx))
        .map_err(render_error)?;
    let html = environment
        .get_template(HTML_TEMPLATE_NAME)
        .and_then(|template| template.render(&ctx))
        .map_err(render_error)?;

    let subject = format!("New task assigned: {}", task.title());
    OutgoingEmail::new(recipient.email.clone(), subject, text)
        .map(|email| email.with_html(html))
        .map_err(|err| AssignmentNotifierError(err.to_string()))
}

fn render_error(err: minijinja::Error) -> AssignmentNotifierError {
    AssignmentNotifierError(format!("template rendering failed: {err}"))
}

#[async_trait]
impl<T> AssignmentNotifier for NotificationSender<T>
where
    T: MailTransport,
{
    async fn notify_assigned(
        &self,
        recipient: &AssignmentRecipient,
        task: &Task,
    ) -> Result<(), AssignmentNotifierError> {
        let email = render_task_assigned(recipient, task)?;
        self.send(&email)
            .await
            .map_err(|err| AssignmentNotifierError(err.to_string()))
    }
}

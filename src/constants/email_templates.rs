use crate::models::domain::UserRole;

pub const INVITATION_SUBJECT_PREFIX: &str = "Assessment Invitation: ";
pub const RESULTS_SUBJECT: &str = "Great work on your assessment!";
pub const WELCOME_SUBJECT: &str = "Welcome to Simmonds English Learning!";

const STYLES: &str = "body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }
.container { max-width: 600px; margin: 0 auto; padding: 40px 20px; }
.header { background: linear-gradient(135deg, #35627A, #A6A9D0); padding: 30px; border-radius: 12px; text-align: center; }
.header h1 { color: white; margin: 0; }
.content { background: #F5F5F5; padding: 30px; border-radius: 12px; margin-top: 20px; }
.score { font-size: 48px; font-weight: bold; color: #35627A; text-align: center; }
.button { display: inline-block; background: #A6A9D0; color: white; padding: 15px 30px; text-decoration: none; border-radius: 8px; margin-top: 20px; }
.footer { text-align: center; color: #8E9A98; margin-top: 30px; font-size: 14px; }";

/// Escapes text for interpolation into HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(heading: &str, body: &str, platform_name: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html>
  <head><style>{STYLES}</style></head>
  <body>
    <div class=\"container\">
      <div class=\"header\"><h1>{heading}</h1></div>
      <div class=\"content\">{body}</div>
      <div class=\"footer\"><p>{platform}</p></div>
    </div>
  </body>
</html>",
        platform = escape_html(platform_name),
    )
}

pub fn role_message(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "You now have full access to manage your company's English learning program.",
        UserRole::Teacher => "You can now manage groups, create tests, and track student progress.",
        UserRole::Student => "Get ready to improve your English skills with personalized learning!",
    }
}

pub fn invitation_html(
    student_name: &str,
    test_title: &str,
    test_url: &str,
    company_name: &str,
    platform_name: &str,
) -> String {
    let body = format!(
        "<p>Hi {name},</p>
<p>You have been invited to take an English assessment: <strong>{title}</strong></p>
<p>This assessment is part of {company}'s employee development program.</p>
<a href=\"{url}\" class=\"button\">Start Assessment</a>
<p>It helps us place you in the learning group that fits your level.</p>",
        name = escape_html(student_name),
        title = escape_html(test_title),
        company = escape_html(company_name),
        url = escape_html(test_url),
    );
    layout("New Assessment Available", &body, platform_name)
}

pub fn results_html(
    student_name: &str,
    test_title: &str,
    score: f64,
    encouraging_message: &str,
    platform_name: &str,
) -> String {
    let body = format!(
        "<div class=\"score\">{score}%</div>
<p style=\"text-align: center;\">{title}</p>
<p>{message}</p>
<p>You'll be placed in a learning group that matches your level, where you can keep growing.</p>",
        score = score.round(),
        title = escape_html(test_title),
        message = escape_html(encouraging_message),
    );
    layout(
        &format!("Great Job, {}!", escape_html(student_name)),
        &body,
        platform_name,
    )
}

pub fn welcome_html(
    name: &str,
    role: UserRole,
    company_name: Option<&str>,
    platform_name: &str,
) -> String {
    let company_line = company_name
        .map(|company| {
            format!(
                "<p>You're part of <strong>{}</strong>'s learning program.</p>",
                escape_html(company)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "<p>Hi {name},</p>
<p>Welcome to the Simmonds English Learning Platform! {role_line}</p>
{company_line}
<p>Get started by logging into your portal and exploring the platform.</p>",
        name = escape_html(name),
        role_line = role_message(role),
    );
    layout("Welcome to Simmonds!", &body, platform_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn invitation_escapes_user_values() {
        let html = invitation_html(
            "<b>Anna</b>",
            "Placement",
            "https://simmonds.online/student/tests/1?a=1&b=2",
            "Acme",
            "Simmonds Platform",
        );

        assert!(html.contains("Hi &lt;b&gt;Anna&lt;/b&gt;,"));
        assert!(html.contains("href=\"https://simmonds.online/student/tests/1?a=1&amp;b=2\""));
        assert!(!html.contains("<b>Anna</b>"));
    }

    #[test]
    fn welcome_includes_role_line_and_optional_company() {
        let with_company = welcome_html("Tom", UserRole::Teacher, Some("Acme"), "Simmonds Platform");
        assert!(with_company.contains(role_message(UserRole::Teacher)));
        assert!(with_company.contains("<strong>Acme</strong>"));

        let without = welcome_html("Tom", UserRole::Student, None, "Simmonds Platform");
        assert!(without.contains(role_message(UserRole::Student)));
        assert!(!without.contains("You're part of"));
    }

    #[test]
    fn results_rounds_score() {
        let html = results_html("Anna", "Progress", 86.666, "Well done!", "Simmonds Platform");
        assert!(html.contains("87%"));
        assert!(html.contains("Great Job, Anna!"));
    }
}

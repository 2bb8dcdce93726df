//! Building [`EmailInput`] records from raw RFC 5322 messages

use crate::attendees::bare_address;
use crate::error::{DetectError, Result};
use crate::types::{EmailId, EmailInput};
use mailparse::{MailHeader, MailHeaderMap, ParsedMail};
use tracing::debug;

/// Parse raw message bytes into the five fields detection looks at
pub fn parse_email_input(uid: u32, raw: &[u8]) -> Result<EmailInput> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| DetectError::Structure(e.to_string()))?;
    let headers = &parsed.headers;

    let email_id = headers
        .get_first_value("Message-ID")
        .map_or_else(|| EmailId::synthetic(uid), EmailId::new);
    let from_email = sender_address(headers)?;
    let to_email = recipient_list(headers);
    let subject = headers.get_first_value("Subject").unwrap_or_default();
    let body_text = body_text(&parsed)?;

    debug!("Read email {email_id} from {from_email}");

    Ok(EmailInput {
        email_id,
        subject,
        body_text,
        from_email,
        to_email,
    })
}

fn sender_address(headers: &[MailHeader]) -> Result<String> {
    let from = headers
        .get_first_value("From")
        .ok_or_else(|| DetectError::MissingHeader("From".into()))?;

    Ok(bare_address(&from).unwrap_or(from.trim()).to_string())
}

fn recipient_list(headers: &[MailHeader]) -> String {
    headers
        .get_first_value("To")
        .map(|to| {
            to.split(',')
                .filter_map(bare_address)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

/// Body of a single-part message, or the first `text/plain` part of a
/// multipart one, falling back to the first `text/html` part without markup
fn body_text(parsed: &ParsedMail) -> Result<String> {
    if parsed.subparts.is_empty() {
        let body = decode(parsed)?;
        let is_html = parsed.ctype.mimetype.to_lowercase().contains("text/html");
        return Ok(if is_html { strip_html(&body) } else { body });
    }

    let mut text = None;
    let mut html = None;
    collect_parts(parsed, &mut text, &mut html)?;

    Ok(text
        .or_else(|| html.map(|h| strip_html(&h)))
        .unwrap_or_default())
}

fn collect_parts(
    parsed: &ParsedMail,
    text: &mut Option<String>,
    html: &mut Option<String>,
) -> Result<()> {
    for part in &parsed.subparts {
        if !part.subparts.is_empty() {
            collect_parts(part, text, html)?;
            continue;
        }

        let mimetype = part.ctype.mimetype.to_lowercase();
        if mimetype.contains("text/plain") && text.is_none() {
            *text = Some(decode(part)?);
        } else if mimetype.contains("text/html") && html.is_none() {
            *html = Some(decode(part)?);
        }
    }

    Ok(())
}

fn decode(part: &ParsedMail) -> Result<String> {
    part.get_body()
        .map_err(|e| DetectError::Decode(e.to_string()))
}

/// Drop tags, script and style content, decode common entities
fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    let mut skip_until: Option<&str> = None;

    while let Some(open) = rest.find('<') {
        if skip_until.is_none() {
            out.push_str(&rest[..open]);
        }
        let Some(close) = rest[open..].find('>') else {
            rest = "";
            break;
        };
        let tag = rest[open + 1..open + close].to_lowercase();
        rest = &rest[open + close + 1..];

        match skip_until {
            Some(end) if tag.starts_with(end) => skip_until = None,
            Some(_) => {}
            None if tag.starts_with("script") => skip_until = Some("/script"),
            None if tag.starts_with("style") => skip_until = Some("/style"),
            None if ["br", "/p", "/div", "/li", "/h", "/tr"]
                .iter()
                .any(|t| tag.starts_with(t)) =>
            {
                out.push('\n');
            }
            None => {}
        }
    }
    if skip_until.is_none() {
        out.push_str(rest);
    }

    out.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

//! View models handed to the templates.
//!
//! Everything here is a pure transformation of the API models; no I/O happens in this module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::markdown::{render_description, SanitizedHtml};
use crate::models::{Front, Member, System};

/// Shown when a member has no avatar, or nobody is fronting.
pub const PLACEHOLDER_AVATAR: &str = "https://fakeimg.pl/512x512/36393f/?text=%20";

/// Shown when a member has no pronouns set.
pub const UNKNOWN_PRONOUNS: &str = "unknown/not specified";

/// Co-fronter text on the simple page when the primary fronter is alone.
pub const NO_OTHERS: &str = "None";

pub const PAGE_TITLE: &str = "Currently fronting";

/// Per-page metadata used by the shared header.
#[derive(Debug, Clone, Serialize)]
pub struct PageInfo {
    pub page_title: String,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
        }
    }
}

/// A member with display defaults applied.
#[derive(Debug, Clone, Serialize)]
pub struct MemberSummary {
    pub name: String,
    pub id: String,
    pub colour: String,
    pub pronouns: String,
    pub avatar_url: String,
    pub created: Option<DateTime<Utc>>,
    pub created_display: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub birthday_display: Option<String>,
}

impl MemberSummary {
    pub fn from_member(member: &Member) -> Result<Self, AppError> {
        let birthday = member.parsed_birthday()?;

        Ok(Self {
            name: member.name.clone(),
            id: member.id.clone(),
            colour: member.color.clone(),
            pronouns: or_default(&member.pronouns, UNKNOWN_PRONOUNS),
            avatar_url: or_default(&member.avatar_url, PLACEHOLDER_AVATAR),
            created: member.created,
            created_display: member.created.as_ref().map(format_timestamp),
            birthday,
            birthday_display: birthday.as_ref().map(format_birthday),
        })
    }
}

/// One entry in the full page's fronter list.
#[derive(Debug, Clone, Serialize)]
pub struct FronterView {
    #[serde(flatten)]
    pub member: MemberSummary,
    pub description: SanitizedHtml,
}

impl FronterView {
    pub fn from_member(member: &Member) -> Result<Self, AppError> {
        Ok(Self {
            member: MemberSummary::from_member(member)?,
            description: render_description(&member.description),
        })
    }
}

/// View model for the full page, listing every current fronter.
#[derive(Debug, Clone, Serialize)]
pub struct FullPage {
    pub page: PageInfo,
    pub sys_name: String,
    pub sys_id: String,
    pub out: bool,
    pub since: Option<DateTime<Utc>>,
    pub since_display: Option<String>,
    /// All fronters in API order, primary first.
    pub fronters: Vec<FronterView>,
    /// Names of everyone after the primary fronter.
    pub others: Vec<String>,
}

/// View model for the simple single-fronter card.
#[derive(Debug, Clone, Serialize)]
pub struct SimplePage {
    pub page: PageInfo,
    pub sys_name: String,
    pub sys_id: String,
    pub out: bool,
    pub since: Option<DateTime<Utc>>,
    pub since_display: Option<String>,
    /// Primary fronter; `None` when nobody is fronting.
    pub fronter: Option<MemberSummary>,
    /// Always set, falling back to the placeholder.
    pub avatar_url: String,
    /// Co-fronters joined with `", "`, or `"None"`. Unset when nobody is fronting.
    pub others: Option<String>,
}

/// Build the full page view model.
pub fn build_full_page(system: &System, front: &Front) -> Result<FullPage, AppError> {
    let fronters = front
        .members
        .iter()
        .map(FronterView::from_member)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FullPage {
        page: PageInfo::default(),
        sys_name: system.display_name(),
        sys_id: system.id.clone(),
        out: front.members.is_empty(),
        since: front.timestamp,
        since_display: front.timestamp.as_ref().map(format_timestamp),
        fronters,
        others: co_fronter_names(front),
    })
}

/// Build the simple page view model.
pub fn build_simple_page(system: &System, front: &Front) -> Result<SimplePage, AppError> {
    let fronter = front.primary().map(MemberSummary::from_member).transpose()?;

    let avatar_url = fronter
        .as_ref()
        .map(|m| m.avatar_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string());

    let others = fronter.as_ref().map(|_| {
        let names = co_fronter_names(front);
        if names.is_empty() {
            NO_OTHERS.to_string()
        } else {
            names.join(", ")
        }
    });

    Ok(SimplePage {
        page: PageInfo::default(),
        sys_name: system.display_name(),
        sys_id: system.id.clone(),
        out: fronter.is_none(),
        since: front.timestamp,
        since_display: front.timestamp.as_ref().map(format_timestamp),
        fronter,
        avatar_url,
        others,
    })
}

fn co_fronter_names(front: &Front) -> Vec<String> {
    front.co_fronters().iter().map(|m| m.name.clone()).collect()
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn format_birthday(date: &NaiveDate) -> String {
    date.format("%B %-d").to_string()
}

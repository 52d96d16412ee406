//! Plain-text rendering of views, forms and notices.

use std::fmt::Display;
use std::io::{self, Write};

use chrono::{NaiveDate, NaiveDateTime};
use epf_desk_store::models::customer::CustomerModel;
use tabwriter::TabWriter;

use crate::forms::confirmation::{ConfirmationForm, FormAction, FormField};
use crate::views::notice::{Notice, NoticeKind};
use crate::views::{completed, pending};

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
/// Wire fields left out of listings.
const HIDDEN_FIELDS: &[&str] = &["password"];

pub fn pending_table<W: Write>(out: &mut W, rows: &[&CustomerModel]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{}", pending::EMPTY_MESSAGE);
    }

    let mut tw = TabWriter::new(&mut *out).padding(2);
    writeln!(
        tw,
        "ID\tNAME\tUAN NUMBER\tUAN PASSWORD\tAADHAR NUMBER\tAADHAR CARD NAME\tDOB\tAADHAR MOBILE\tBANK A/C NO.\tIFSC CODE\tCOMMISSION\tPAID AMOUNT\tWORK STATUS\tUPDATED STATUS"
    )?;
    for r in rows {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.id,
            text(&r.name),
            text(&r.uan_number),
            text(&r.uan_password),
            text(&r.aadhar_number),
            text(&r.aadhar_card_name),
            date(r.dob.as_ref()),
            text(&r.aadhar_mobile),
            text(&r.bank_account_number),
            text(&r.ifsc_code),
            text(&r.commission_amount),
            text(&r.paid_amount),
            r.status_label(),
            if r.has_notes() { "View" } else { "-" },
        )?;
    }
    tw.flush()
}

pub fn completed_table<W: Write>(out: &mut W, rows: &[&CustomerModel]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{}", completed::EMPTY_MESSAGE);
    }

    let mut tw = TabWriter::new(&mut *out).padding(2);
    writeln!(
        tw,
        "ID\tNAME\tAADHAR NAME\tUAN\tDOB\tWORK STATUS\tPAID AMOUNT\tCREATE DATE\tCONFIRM DATE"
    )?;
    for r in rows {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            r.id,
            text(&r.name),
            text(&r.aadhar_card_name),
            text(&r.uan_number),
            date(r.dob.as_ref()),
            r.status_label(),
            text(&r.paid_amount),
            timestamp(r.create_date.as_ref()).unwrap_or_default(),
            timestamp(r.confirm_date.as_ref()).unwrap_or_else(|| "--".to_string()),
        )?;
    }
    tw.flush()
}

/// The rows in their wire shape, without the customer password.
pub fn records_json<W: Write>(out: &mut W, rows: &[&CustomerModel]) -> io::Result<()> {
    let mut listing = Vec::with_capacity(rows.len());
    for row in rows {
        let mut value = serde_json::to_value(row)?;
        if let Some(fields) = value.as_object_mut() {
            for hidden in HIDDEN_FIELDS {
                fields.remove(*hidden);
            }
        }
        listing.push(value);
    }
    serde_json::to_writer_pretty(&mut *out, &listing)?;
    writeln!(out)
}

/// The confirmation form as a two-column field listing.
pub fn confirmation_form<W: Write>(out: &mut W, form: &ConfirmationForm) -> io::Result<()> {
    let record = form.record();
    writeln!(
        out,
        "Customer #{} {} ({})",
        form.id(),
        record.name.as_deref().unwrap_or_default(),
        record.status_label()
    )?;

    {
        let mut tw = TabWriter::new(&mut *out).padding(2);
        for field in FormField::ALL {
            writeln!(tw, "{}\t{}", field.label(), form.value(field))?;
        }
        writeln!(tw, "Password\t{}", form.password_display())?;
        tw.flush()?;
    }

    let confirm = if form.is_enabled(FormAction::Confirm) {
        "available"
    } else {
        "disabled until a paid amount above zero is entered"
    };
    writeln!(out, "Confirm: {confirm}")
}

pub fn notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let marker = match notice.kind {
        NoticeKind::Success => "✅",
        NoticeKind::Error => "❌",
    };
    if notice.text.is_empty() {
        writeln!(out, "{marker} {}", notice.title)
    } else {
        writeln!(out, "{marker} {}: {}", notice.title, notice.text)
    }
}

fn text<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn date(value: Option<&NaiveDate>) -> String {
    value.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

fn timestamp(value: Option<&NaiveDateTime>) -> Option<String> {
    value.map(|ts| ts.format(DATE_TIME_FORMAT).to_string())
}

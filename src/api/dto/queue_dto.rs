//! Queue-related DTOs for admission, status, listing, and seat calls.
//!
//! All field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EntryId, QueueEntry, QueueStatus, StudentRef, WaitingStudent};

/// Request body for `POST /api/queue/add`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmitRequest {
    /// Examinee's ID card number. Duplicates are allowed (re-entry).
    pub id_card_number: String,
    /// Examinee's display name.
    pub name: String,
}

/// One entry record for `GET /api/queue/list`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    /// Store-assigned sequence identifier.
    pub id: EntryId,
    /// Examinee's ID card number.
    pub id_card_number: String,
    /// Examinee's display name.
    pub name: String,
    /// Admission timestamp.
    pub sign_in_time: DateTime<Utc>,
    /// Assigned seat label, if called.
    pub seat_number: Option<String>,
    /// Seat-call timestamp, if called.
    pub call_time: Option<DateTime<Utc>>,
}

impl From<QueueEntry> for EntryDto {
    fn from(entry: QueueEntry) -> Self {
        Self {
            id: entry.id,
            id_card_number: entry.id_card_number,
            name: entry.name,
            sign_in_time: entry.sign_in_time,
            seat_number: entry.seat_number,
            call_time: entry.call_time,
        }
    }
}

/// One waiting row in the status response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitingStudentDto {
    /// Entry identifier.
    pub id: EntryId,
    /// Examinee's display name.
    pub name: String,
    /// Admission timestamp.
    pub sign_in_time: DateTime<Utc>,
}

impl From<WaitingStudent> for WaitingStudentDto {
    fn from(student: WaitingStudent) -> Self {
        Self {
            id: student.id,
            name: student.name,
            sign_in_time: student.sign_in_time,
        }
    }
}

/// Response body for `GET /api/queue/status`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Name of the most recently called examinee, or `null`.
    pub current_student: Option<String>,
    /// Oldest-first waiting entries, at most 15.
    pub waiting_students: Vec<WaitingStudentDto>,
}

impl From<QueueStatus> for StatusResponse {
    fn from(status: QueueStatus) -> Self {
        Self {
            current_student: status.current_student,
            waiting_students: status
                .waiting_students
                .into_iter()
                .map(WaitingStudentDto::from)
                .collect(),
        }
    }
}

/// Minimal examinee reference: `{id, name}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDto {
    /// Entry identifier.
    pub id: EntryId,
    /// Examinee's display name.
    pub name: String,
}

impl From<StudentRef> for StudentDto {
    fn from(student: StudentRef) -> Self {
        Self {
            id: student.id,
            name: student.name,
        }
    }
}

/// Response body for `GET /api/queue/next`.
#[derive(Debug, Serialize, ToSchema)]
pub struct NextResponse {
    /// Oldest waiting examinee, or `null` when nobody is waiting.
    pub student: Option<StudentDto>,
}

/// Request body for `POST /api/queue/notify`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CallNextRequest {
    /// Seat label to call the next examinee to.
    pub seat_number: String,
}

/// Response body for `POST /api/queue/notify`.
///
/// `student` is omitted entirely when nobody was waiting.
#[derive(Debug, Serialize, ToSchema)]
pub struct CallNextResponse {
    /// Human-readable confirmation message.
    pub message: String,
    /// The called examinee, present only on an actual call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDto>,
}

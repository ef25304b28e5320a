//! Domain entities decoded from congress.gov documents.
//!
//! # Design
//! Every entity is an immutable value whose fields are all `Option`: the API
//! omits or nulls fields freely depending on record age and endpoint, and a
//! missing field must never fail a whole decode. Absent and `null` both map to
//! `None`, while an empty string or array stays `Some` so callers can tell
//! "not reported" from "reported as empty". Enumerated strings such as
//! chamber or party are kept as the server sent them.
//!
//! Field names follow the external camelCase names; `type` is renamed to a
//! descriptive field name per entity.

pub mod bills;
pub mod committees;
pub mod congress;
pub mod congressional_record;
pub mod crs_reports;
pub mod hearings;
pub mod house_votes;
pub mod laws;
pub mod members;
pub mod nominations;
pub mod summaries;
pub mod treaties;

pub use bills::{
    Action, Amendment, Bill, BillDetail, BillSubjects, Committee, Cosponsor, LatestAction, Law,
    PolicyArea, RelatedBill, RelationshipDetail, Subject, Summary, TextFormat, TextVersion, Title,
};
pub use committees::{
    CommitteeBill, CommitteeDetailInfo, CommitteeHistory, CommitteeItem, CommitteePrintDetail,
    CommitteePrintItem, CommitteePrintText, CommitteeReportDetail, CommitteeReportItem,
    CommitteeReportText, ParentCommittee, ResourceCount, Subcommittee,
};
pub use congress::{Congress, Session};
pub use congressional_record::DailyCongressionalRecord;
pub use crs_reports::{
    CrsReport, CrsReportAuthor, CrsReportDetail, CrsReportFormat, CrsReportRelatedMaterial,
    CrsReportTopic,
};
pub use hearings::{AssociatedMeeting, Hearing, HearingCommittee, HearingDate, HearingFormat};
pub use house_votes::{HouseVote, HouseVoteDetail, HouseVoteMembers, MemberVote, Party, VoteParty};
pub use laws::{LawDetail, LawItem};
pub use members::Sponsor;
pub use nominations::{Nomination, Nominee};
pub use summaries::SummaryItem;
pub use treaties::Treaty;

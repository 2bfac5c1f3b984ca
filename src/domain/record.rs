//! Daily usage aggregate
//!
//! A [`ReportRecord`] holds one organisation's usage counts for one day across
//! the two conferencing platforms. Vidyo reports totals only; Pexip splits its
//! totals by client protocol. "MinuteLong" counters cover sessions that lasted
//! beyond the upstream long-session threshold.
//!
//! Counter names are fixed: they are both the store attribute names and the
//! template value names, so the record exposes them as an enumerable set
//! ([`COUNTER_NAMES`], [`ReportRecord::counters`]) instead of a loose map.

use serde::{Deserialize, Serialize};

/// Number of usage counters in a record
pub const COUNTER_COUNT: usize = 18;

/// Counter names, in report order
pub const COUNTER_NAMES: [&str; COUNTER_COUNT] = [
    "Vidyo",
    "VidyoTotalParticipants",
    "VidyoMinuteLong",
    "VidyoParticipantsMinuteLong",
    "Pexip",
    "PexipTotalParticipants",
    "PexipWebRTC",
    "PexipH323",
    "PexipSIP",
    "PexipS4B",
    "PexipRTMP",
    "PexipMinuteLong",
    "PexipTotalParticipantsMinuteLong",
    "PexipWebRTCMinuteLong",
    "PexipH323MinuteLong",
    "PexipSIPMinuteLong",
    "PexipS4BMinuteLong",
    "PexipRTMPMinuteLong",
];

/// One day of aggregated usage for one organisation
///
/// `Default` is the "no activity" record: every counter is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "Organisation")]
    pub organisation: i64,
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Vidyo")]
    pub vidyo: u64,
    #[serde(rename = "VidyoTotalParticipants")]
    pub vidyo_total_participants: u64,
    #[serde(rename = "VidyoMinuteLong")]
    pub vidyo_minute_long: u64,
    #[serde(rename = "VidyoParticipantsMinuteLong")]
    pub vidyo_participants_minute_long: u64,

    #[serde(rename = "Pexip")]
    pub pexip: u64,
    #[serde(rename = "PexipTotalParticipants")]
    pub pexip_total_participants: u64,
    #[serde(rename = "PexipWebRTC")]
    pub pexip_webrtc: u64,
    #[serde(rename = "PexipH323")]
    pub pexip_h323: u64,
    #[serde(rename = "PexipSIP")]
    pub pexip_sip: u64,
    #[serde(rename = "PexipS4B")]
    pub pexip_s4b: u64,
    #[serde(rename = "PexipRTMP")]
    pub pexip_rtmp: u64,
    #[serde(rename = "PexipMinuteLong")]
    pub pexip_minute_long: u64,
    #[serde(rename = "PexipTotalParticipantsMinuteLong")]
    pub pexip_total_participants_minute_long: u64,
    #[serde(rename = "PexipWebRTCMinuteLong")]
    pub pexip_webrtc_minute_long: u64,
    #[serde(rename = "PexipH323MinuteLong")]
    pub pexip_h323_minute_long: u64,
    #[serde(rename = "PexipSIPMinuteLong")]
    pub pexip_sip_minute_long: u64,
    #[serde(rename = "PexipS4BMinuteLong")]
    pub pexip_s4b_minute_long: u64,
    #[serde(rename = "PexipRTMPMinuteLong")]
    pub pexip_rtmp_minute_long: u64,
}

impl ReportRecord {
    /// Creates an all-zero record for an organisation and lookup date
    pub fn empty(organisation: i64, date: impl Into<String>) -> Self {
        Self {
            organisation,
            date: date.into(),
            ..Self::default()
        }
    }

    /// Returns every counter with its name, in [`COUNTER_NAMES`] order
    pub fn counters(&self) -> [(&'static str, u64); COUNTER_COUNT] {
        [
            ("Vidyo", self.vidyo),
            ("VidyoTotalParticipants", self.vidyo_total_participants),
            ("VidyoMinuteLong", self.vidyo_minute_long),
            ("VidyoParticipantsMinuteLong", self.vidyo_participants_minute_long),
            ("Pexip", self.pexip),
            ("PexipTotalParticipants", self.pexip_total_participants),
            ("PexipWebRTC", self.pexip_webrtc),
            ("PexipH323", self.pexip_h323),
            ("PexipSIP", self.pexip_sip),
            ("PexipS4B", self.pexip_s4b),
            ("PexipRTMP", self.pexip_rtmp),
            ("PexipMinuteLong", self.pexip_minute_long),
            (
                "PexipTotalParticipantsMinuteLong",
                self.pexip_total_participants_minute_long,
            ),
            ("PexipWebRTCMinuteLong", self.pexip_webrtc_minute_long),
            ("PexipH323MinuteLong", self.pexip_h323_minute_long),
            ("PexipSIPMinuteLong", self.pexip_sip_minute_long),
            ("PexipS4BMinuteLong", self.pexip_s4b_minute_long),
            ("PexipRTMPMinuteLong", self.pexip_rtmp_minute_long),
        ]
    }

    /// Looks up a counter by name
    pub fn counter(&self, name: &str) -> Option<u64> {
        self.counters()
            .into_iter()
            .find(|(counter, _)| *counter == name)
            .map(|(_, value)| value)
    }

    /// Mutable access to a counter by name
    pub fn counter_mut(&mut self, name: &str) -> Option<&mut u64> {
        let slot = match name {
            "Vidyo" => &mut self.vidyo,
            "VidyoTotalParticipants" => &mut self.vidyo_total_participants,
            "VidyoMinuteLong" => &mut self.vidyo_minute_long,
            "VidyoParticipantsMinuteLong" => &mut self.vidyo_participants_minute_long,
            "Pexip" => &mut self.pexip,
            "PexipTotalParticipants" => &mut self.pexip_total_participants,
            "PexipWebRTC" => &mut self.pexip_webrtc,
            "PexipH323" => &mut self.pexip_h323,
            "PexipSIP" => &mut self.pexip_sip,
            "PexipS4B" => &mut self.pexip_s4b,
            "PexipRTMP" => &mut self.pexip_rtmp,
            "PexipMinuteLong" => &mut self.pexip_minute_long,
            "PexipTotalParticipantsMinuteLong" => &mut self.pexip_total_participants_minute_long,
            "PexipWebRTCMinuteLong" => &mut self.pexip_webrtc_minute_long,
            "PexipH323MinuteLong" => &mut self.pexip_h323_minute_long,
            "PexipSIPMinuteLong" => &mut self.pexip_sip_minute_long,
            "PexipS4BMinuteLong" => &mut self.pexip_s4b_minute_long,
            "PexipRTMPMinuteLong" => &mut self.pexip_rtmp_minute_long,
            _ => return None,
        };
        Some(slot)
    }

    /// True when every counter is zero
    pub fn is_empty(&self) -> bool {
        self.counters().iter().all(|(_, value)| *value == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let record = ReportRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.counters().len(), COUNTER_COUNT);
    }

    #[test]
    fn test_counters_follow_name_order() {
        let record = ReportRecord::default();
        let names: Vec<&str> = record.counters().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, COUNTER_NAMES.to_vec());
    }

    #[test]
    fn test_counter_mut_reaches_every_name() {
        let mut record = ReportRecord::default();
        for (i, name) in COUNTER_NAMES.iter().enumerate() {
            *record.counter_mut(name).unwrap() = i as u64 + 1;
        }
        for (i, name) in COUNTER_NAMES.iter().enumerate() {
            assert_eq!(record.counter(name), Some(i as u64 + 1), "{name}");
        }
        assert!(record.counter_mut("Organisation").is_none());
    }

    #[test]
    fn test_serde_names_match_counter_names() {
        let json = serde_json::to_value(ReportRecord::empty(3, "2024-03-14")).unwrap();
        let map = json.as_object().unwrap();
        for name in COUNTER_NAMES {
            assert!(map.contains_key(name), "missing {name}");
        }
        assert_eq!(map["Organisation"], 3);
        assert_eq!(map["Date"], "2024-03-14");
        assert_eq!(map.len(), COUNTER_COUNT + 2);
    }
}

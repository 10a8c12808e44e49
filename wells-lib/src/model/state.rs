//! Recognized states and their upstream field names

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A state (or group of states) with its own well-count column.
///
/// Column names come straight from the upstream dataset, typos included
/// (`west_bangal__cbm_`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Gujarat,
    Rajasthan,
    Assam,
    Tripura,
    AndhraPradesh,
    TamilNadu,
    WestBengal,
    Jharkhand,
    MadhyaPradesh,
    OtherStates,
}

impl State {
    /// Every recognized state, in upstream column order.
    pub const ALL: [State; 10] = [
        State::Gujarat,
        State::Rajasthan,
        State::Assam,
        State::Tripura,
        State::AndhraPradesh,
        State::TamilNadu,
        State::WestBengal,
        State::Jharkhand,
        State::MadhyaPradesh,
        State::OtherStates,
    ];

    /// The key users pass on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            State::Gujarat => "gujarat",
            State::Rajasthan => "rajasthan",
            State::Assam => "assam",
            State::Tripura => "tripura",
            State::AndhraPradesh => "andhra_pradesh",
            State::TamilNadu => "tamilnadu",
            State::WestBengal => "west_bengal",
            State::Jharkhand => "jharkhand",
            State::MadhyaPradesh => "madhya_pradesh",
            State::OtherStates => "other_states",
        }
    }

    /// The record field holding this state's well count.
    pub fn field(&self) -> &'static str {
        match self {
            State::Gujarat => "gujarat",
            State::Rajasthan => "rajasthan",
            State::Assam => "assam___arunachal_pradesh",
            State::Tripura => "tripura",
            State::AndhraPradesh => "andhra_pradesh",
            State::TamilNadu => "tamilnadu",
            State::WestBengal => "west_bangal__cbm_",
            State::Jharkhand => "jharkhand__cbm_",
            State::MadhyaPradesh => "madhya_pradesh__cbm_",
            State::OtherStates => "other_state__up_hp_mp_bihar__punjab_jk_wb_",
        }
    }

    /// Human-readable name, as shown on maps and summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            State::Gujarat => "Gujarat",
            State::Rajasthan => "Rajasthan",
            State::Assam => "Assam & Arunachal Pradesh",
            State::Tripura => "Tripura",
            State::AndhraPradesh => "Andhra Pradesh",
            State::TamilNadu => "Tamil Nadu",
            State::WestBengal => "West Bengal (CBM)",
            State::Jharkhand => "Jharkhand (CBM)",
            State::MadhyaPradesh => "Madhya Pradesh (CBM)",
            State::OtherStates => "Other States",
        }
    }

    /// Every recognized key, in upstream column order.
    pub fn keys() -> Vec<&'static str> {
        State::ALL.iter().map(State::key).collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for State {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        State::ALL
            .into_iter()
            .find(|state| state.key() == wanted)
            .ok_or_else(|| ValidationError::UnknownState {
                given: s.to_string(),
                valid: State::keys(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_states() {
        assert_eq!("gujarat".parse::<State>().unwrap(), State::Gujarat);
        assert_eq!("Assam".parse::<State>().unwrap().field(), "assam___arunachal_pradesh");
        assert_eq!("WEST_BENGAL".parse::<State>().unwrap().field(), "west_bangal__cbm_");
    }

    #[test]
    fn test_unknown_state_lists_every_key() {
        let err = "atlantis".parse::<State>().unwrap_err();
        let ValidationError::UnknownState { given, valid } = err else {
            panic!("expected UnknownState");
        };

        assert_eq!(given, "atlantis");
        assert_eq!(valid.len(), 10);
        assert_eq!(valid[0], "gujarat");
        assert_eq!(valid[9], "other_states");
    }

    #[test]
    fn test_keys_round_trip() {
        for state in State::ALL {
            assert_eq!(state.key().parse::<State>().unwrap(), state);
        }
    }
}

//! State and district tables backing the location filters.

use kisanmitra_core::{Error, Result};

pub struct StateInfo {
    pub name: &'static str,
    pub districts: [&'static str; 5],
}

/// The states the app covers, each with its five largest mandi districts
pub const STATES: &[StateInfo] = &[
    StateInfo {
        name: "Punjab",
        districts: ["Amritsar", "Ludhiana", "Patiala", "Jalandhar", "Bathinda"],
    },
    StateInfo {
        name: "Haryana",
        districts: ["Karnal", "Hisar", "Ambala", "Gurugram", "Rohtak"],
    },
    StateInfo {
        name: "Uttar Pradesh",
        districts: ["Lucknow", "Kanpur", "Agra", "Varanasi", "Meerut"],
    },
    StateInfo {
        name: "Madhya Pradesh",
        districts: ["Bhopal", "Indore", "Gwalior", "Jabalpur", "Ujjain"],
    },
    StateInfo {
        name: "Maharashtra",
        districts: ["Mumbai", "Pune", "Nagpur", "Nashik", "Aurangabad"],
    },
    StateInfo {
        name: "Rajasthan",
        districts: ["Jaipur", "Jodhpur", "Udaipur", "Kota", "Bikaner"],
    },
    StateInfo {
        name: "Gujarat",
        districts: ["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Gandhinagar"],
    },
    StateInfo {
        name: "Karnataka",
        districts: ["Bengaluru", "Mysuru", "Hubballi", "Mangaluru", "Belagavi"],
    },
    StateInfo {
        name: "Tamil Nadu",
        districts: [
            "Chennai",
            "Coimbatore",
            "Madurai",
            "Tiruchirappalli",
            "Salem",
        ],
    },
    StateInfo {
        name: "Andhra Pradesh",
        districts: [
            "Visakhapatnam",
            "Vijayawada",
            "Guntur",
            "Tirupati",
            "Nellore",
        ],
    },
    StateInfo {
        name: "Telangana",
        districts: [
            "Hyderabad",
            "Warangal",
            "Nizamabad",
            "Karimnagar",
            "Khammam",
        ],
    },
    StateInfo {
        name: "West Bengal",
        districts: ["Kolkata", "Howrah", "Durgapur", "Asansol", "Siliguri"],
    },
    StateInfo {
        name: "Bihar",
        districts: ["Patna", "Gaya", "Muzaffarpur", "Bhagalpur", "Darbhanga"],
    },
];

pub fn state_names() -> Vec<&'static str> {
    STATES.iter().map(|s| s.name).collect()
}

pub fn find_state(name: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

pub fn districts_of(state: &str) -> Result<&'static [&'static str]> {
    find_state(state)
        .map(|s| &s.districts[..])
        .ok_or_else(|| Error::UnknownState(state.to_string()))
}

/// Check a state/district pair the way the linked dropdowns do: the district
/// list depends on the chosen state.
pub fn validate_location(state: &str, district: &str) -> Result<()> {
    let districts = districts_of(state)?;
    if districts.iter().any(|d| d.eq_ignore_ascii_case(district)) {
        Ok(())
    } else {
        Err(Error::UnknownDistrict {
            state: state.to_string(),
            district: district.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(find_state("punjab").is_some());
        assert!(find_state("PUNJAB").is_some());
        assert!(find_state("Atlantis").is_none());
    }

    #[test]
    fn districts_belong_to_their_state() {
        assert!(validate_location("Punjab", "Ludhiana").is_ok());
        assert!(validate_location("Punjab", "Karnal").is_err());
        assert!(validate_location("Narnia", "Ludhiana").is_err());
    }

    #[test]
    fn thirteen_states_five_districts_each() {
        assert_eq!(STATES.len(), 13);
        for state in STATES {
            assert_eq!(state.districts.len(), 5, "{}", state.name);
        }
    }
}

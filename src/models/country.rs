//! ISO-3166 country table
//!
//! Static table of the countries a location can reference, carrying the
//! 2-letter code, the symbolic name and the display name. Imported place
//! strings are resolved against all three forms.

/// One ISO-3166 country entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO-3166-1 alpha-2 code, e.g. `US`
    pub code: &'static str,
    /// Symbolic name, e.g. `UNITED_STATES`
    pub name: &'static str,
    /// Display name, e.g. `United States`
    pub display: &'static str,
}

/// All known countries, ordered by display name
pub const COUNTRIES: &[Country] = &[
    Country { code: "AF", name: "AFGHANISTAN", display: "Afghanistan" },
    Country { code: "AX", name: "ALAND_ISLANDS", display: "Aland Islands" },
    Country { code: "AL", name: "ALBANIA", display: "Albania" },
    Country { code: "DZ", name: "ALGERIA", display: "Algeria" },
    Country { code: "AS", name: "AMERICAN_SAMOA", display: "American Samoa" },
    Country { code: "AD", name: "ANDORRA", display: "Andorra" },
    Country { code: "AO", name: "ANGOLA", display: "Angola" },
    Country { code: "AQ", name: "ANTARCTICA", display: "Antarctica" },
    Country { code: "AG", name: "ANTIGUA_AND_BARBUDA", display: "Antigua and Barbuda" },
    Country { code: "AR", name: "ARGENTINA", display: "Argentina" },
    Country { code: "AM", name: "ARMENIA", display: "Armenia" },
    Country { code: "AW", name: "ARUBA", display: "Aruba" },
    Country { code: "AU", name: "AUSTRALIA", display: "Australia" },
    Country { code: "AT", name: "AUSTRIA", display: "Austria" },
    Country { code: "AZ", name: "AZERBAIJAN", display: "Azerbaijan" },
    Country { code: "BS", name: "BAHAMAS", display: "Bahamas" },
    Country { code: "BH", name: "BAHRAIN", display: "Bahrain" },
    Country { code: "BD", name: "BANGLADESH", display: "Bangladesh" },
    Country { code: "BB", name: "BARBADOS", display: "Barbados" },
    Country { code: "BY", name: "BELARUS", display: "Belarus" },
    Country { code: "BE", name: "BELGIUM", display: "Belgium" },
    Country { code: "BZ", name: "BELIZE", display: "Belize" },
    Country { code: "BJ", name: "BENIN", display: "Benin" },
    Country { code: "BM", name: "BERMUDA", display: "Bermuda" },
    Country { code: "BT", name: "BHUTAN", display: "Bhutan" },
    Country { code: "BO", name: "BOLIVIA", display: "Bolivia" },
    Country { code: "BA", name: "BOSNIA_AND_HERZEGOVINA", display: "Bosnia and Herzegovina" },
    Country { code: "BW", name: "BOTSWANA", display: "Botswana" },
    Country { code: "BV", name: "BOUVET_ISLAND", display: "Bouvet Island" },
    Country { code: "BR", name: "BRAZIL", display: "Brazil" },
    Country { code: "IO", name: "BRITISH_INDIAN_OCEAN_TERRITORY", display: "British Indian Ocean Territory" },
    Country { code: "VG", name: "BRITISH_VIRGIN_ISLANDS", display: "British Virgin Islands" },
    Country { code: "BN", name: "BRUNEI", display: "Brunei Darussalam" },
    Country { code: "BG", name: "BULGARIA", display: "Bulgaria" },
    Country { code: "BF", name: "BURKINA_FASO", display: "Burkina Faso" },
    Country { code: "BI", name: "BURUNDI", display: "Burundi" },
    Country { code: "CV", name: "CABO_VERDE", display: "Cabo Verde" },
    Country { code: "KH", name: "CAMBODIA", display: "Cambodia" },
    Country { code: "CM", name: "CAMEROON", display: "Cameroon" },
    Country { code: "CA", name: "CANADA", display: "Canada" },
    Country { code: "BQ", name: "CARIBBEAN_NETHERLANDS", display: "Caribbean Netherlands" },
    Country { code: "KY", name: "CAYMAN_ISLANDS", display: "Cayman Islands" },
    Country { code: "CF", name: "CENTRAL_AFRICAN_REPUBLIC", display: "Central African Republic" },
    Country { code: "TD", name: "CHAD", display: "Chad" },
    Country { code: "CL", name: "CHILE", display: "Chile" },
    Country { code: "CN", name: "CHINA", display: "China" },
    Country { code: "CX", name: "CHRISTMAS_ISLAND", display: "Christmas Island" },
    Country { code: "CC", name: "COCOS_ISLANDS", display: "Cocos Islands" },
    Country { code: "CO", name: "COLOMBIA", display: "Colombia" },
    Country { code: "KM", name: "COMOROS", display: "Comoros" },
    Country { code: "CG", name: "CONGO", display: "Congo" },
    Country { code: "CK", name: "COOK_ISLANDS", display: "Cook Islands" },
    Country { code: "CR", name: "COSTA_RICA", display: "Costa Rica" },
    Country { code: "CI", name: "COTE_DIVOIRE", display: "Côte d'Ivoire" },
    Country { code: "HR", name: "CROATIA", display: "Croatia" },
    Country { code: "CU", name: "CUBA", display: "Cuba" },
    Country { code: "CW", name: "CURACAO", display: "Curaçao" },
    Country { code: "CY", name: "CYPRUS", display: "Cyprus" },
    Country { code: "CZ", name: "CZECHIA", display: "Czechia" },
    Country { code: "CD", name: "DEMOCRATIC_REPUBLIC_OF_THE_CONGO", display: "Democratic Republic of the Congo" },
    Country { code: "DK", name: "DENMARK", display: "Denmark" },
    Country { code: "DJ", name: "DJIBOUTI", display: "Djibouti" },
    Country { code: "DM", name: "DOMINICA", display: "Dominica" },
    Country { code: "DO", name: "DOMINICAN_REPUBLIC", display: "Dominican Republic" },
    Country { code: "EC", name: "ECUADOR", display: "Ecuador" },
    Country { code: "EG", name: "EGYPT", display: "Egypt" },
    Country { code: "SV", name: "EL_SALVADOR", display: "El Salvador" },
    Country { code: "GQ", name: "EQUATORIAL_GUINEA", display: "Equatorial Guinea" },
    Country { code: "ER", name: "ERITREA", display: "Eritrea" },
    Country { code: "EE", name: "ESTONIA", display: "Estonia" },
    Country { code: "SZ", name: "ESWATINI", display: "Eswatini" },
    Country { code: "ET", name: "ETHIOPIA", display: "Ethiopia" },
    Country { code: "FK", name: "FALKLAND_ISLANDS", display: "Falkland Islands" },
    Country { code: "FO", name: "FAROE_ISLANDS", display: "Faroe Islands" },
    Country { code: "FJ", name: "FIJI", display: "Fiji" },
    Country { code: "FI", name: "FINLAND", display: "Finland" },
    Country { code: "FR", name: "FRANCE", display: "France" },
    Country { code: "GF", name: "FRENCH_GUIANA", display: "French Guiana" },
    Country { code: "PF", name: "FRENCH_POLYNESIA", display: "French Polynesia" },
    Country { code: "TF", name: "FRENCH_SOUTHERN_TERRITORIES", display: "French Southern Territories" },
    Country { code: "GA", name: "GABON", display: "Gabon" },
    Country { code: "GM", name: "GAMBIA", display: "Gambia" },
    Country { code: "GE", name: "GEORGIA", display: "Georgia" },
    Country { code: "DE", name: "GERMANY", display: "Germany" },
    Country { code: "GH", name: "GHANA", display: "Ghana" },
    Country { code: "GI", name: "GIBRALTAR", display: "Gibraltar" },
    Country { code: "GR", name: "GREECE", display: "Greece" },
    Country { code: "GL", name: "GREENLAND", display: "Greenland" },
    Country { code: "GD", name: "GRENADA", display: "Grenada" },
    Country { code: "GP", name: "GUADELOUPE", display: "Guadeloupe" },
    Country { code: "GU", name: "GUAM", display: "Guam" },
    Country { code: "GT", name: "GUATEMALA", display: "Guatemala" },
    Country { code: "GG", name: "GUERNSEY", display: "Guernsey" },
    Country { code: "GN", name: "GUINEA", display: "Guinea" },
    Country { code: "GW", name: "GUINEA_BISSAU", display: "Guinea-Bissau" },
    Country { code: "GY", name: "GUYANA", display: "Guyana" },
    Country { code: "HT", name: "HAITI", display: "Haiti" },
    Country { code: "HM", name: "HEARD_ISLAND_AND_MCDONALD_ISLANDS", display: "Heard Island and McDonald Islands" },
    Country { code: "VA", name: "HOLY_SEE", display: "Holy See" },
    Country { code: "HN", name: "HONDURAS", display: "Honduras" },
    Country { code: "HK", name: "HONG_KONG", display: "Hong Kong" },
    Country { code: "HU", name: "HUNGARY", display: "Hungary" },
    Country { code: "IS", name: "ICELAND", display: "Iceland" },
    Country { code: "IN", name: "INDIA", display: "India" },
    Country { code: "ID", name: "INDONESIA", display: "Indonesia" },
    Country { code: "IR", name: "IRAN", display: "Iran" },
    Country { code: "IQ", name: "IRAQ", display: "Iraq" },
    Country { code: "IE", name: "IRELAND", display: "Ireland" },
    Country { code: "IM", name: "ISLE_OF_MAN", display: "Isle of Man" },
    Country { code: "IL", name: "ISRAEL", display: "Israel" },
    Country { code: "IT", name: "ITALY", display: "Italy" },
    Country { code: "JM", name: "JAMAICA", display: "Jamaica" },
    Country { code: "JP", name: "JAPAN", display: "Japan" },
    Country { code: "JE", name: "JERSEY", display: "Jersey" },
    Country { code: "JO", name: "JORDAN", display: "Jordan" },
    Country { code: "KZ", name: "KAZAKHSTAN", display: "Kazakhstan" },
    Country { code: "KE", name: "KENYA", display: "Kenya" },
    Country { code: "KI", name: "KIRIBATI", display: "Kiribati" },
    Country { code: "KW", name: "KUWAIT", display: "Kuwait" },
    Country { code: "KG", name: "KYRGYZSTAN", display: "Kyrgyzstan" },
    Country { code: "LA", name: "LAOS", display: "Laos" },
    Country { code: "LV", name: "LATVIA", display: "Latvia" },
    Country { code: "LB", name: "LEBANON", display: "Lebanon" },
    Country { code: "LS", name: "LESOTHO", display: "Lesotho" },
    Country { code: "LR", name: "LIBERIA", display: "Liberia" },
    Country { code: "LY", name: "LIBYA", display: "Libya" },
    Country { code: "LI", name: "LIECHTENSTEIN", display: "Liechtenstein" },
    Country { code: "LT", name: "LITHUANIA", display: "Lithuania" },
    Country { code: "LU", name: "LUXEMBOURG", display: "Luxembourg" },
    Country { code: "MO", name: "MACAO", display: "Macao" },
    Country { code: "MG", name: "MADAGASCAR", display: "Madagascar" },
    Country { code: "MW", name: "MALAWI", display: "Malawi" },
    Country { code: "MY", name: "MALAYSIA", display: "Malaysia" },
    Country { code: "MV", name: "MALDIVES", display: "Maldives" },
    Country { code: "ML", name: "MALI", display: "Mali" },
    Country { code: "MT", name: "MALTA", display: "Malta" },
    Country { code: "MH", name: "MARSHALL_ISLANDS", display: "Marshall Islands" },
    Country { code: "MQ", name: "MARTINIQUE", display: "Martinique" },
    Country { code: "MR", name: "MAURITANIA", display: "Mauritania" },
    Country { code: "MU", name: "MAURITIUS", display: "Mauritius" },
    Country { code: "YT", name: "MAYOTTE", display: "Mayotte" },
    Country { code: "MX", name: "MEXICO", display: "Mexico" },
    Country { code: "FM", name: "MICRONESIA", display: "Micronesia" },
    Country { code: "MD", name: "MOLDOVA", display: "Moldova" },
    Country { code: "MC", name: "MONACO", display: "Monaco" },
    Country { code: "MN", name: "MONGOLIA", display: "Mongolia" },
    Country { code: "ME", name: "MONTENEGRO", display: "Montenegro" },
    Country { code: "MS", name: "MONTSERRAT", display: "Montserrat" },
    Country { code: "MA", name: "MOROCCO", display: "Morocco" },
    Country { code: "MZ", name: "MOZAMBIQUE", display: "Mozambique" },
    Country { code: "MM", name: "MYANMAR", display: "Myanmar" },
    Country { code: "NA", name: "NAMIBIA", display: "Namibia" },
    Country { code: "NR", name: "NAURU", display: "Nauru" },
    Country { code: "NP", name: "NEPAL", display: "Nepal" },
    Country { code: "NL", name: "NETHERLANDS", display: "Netherlands" },
    Country { code: "NC", name: "NEW_CALEDONIA", display: "New Caledonia" },
    Country { code: "NZ", name: "NEW_ZEALAND", display: "New Zealand" },
    Country { code: "NI", name: "NICARAGUA", display: "Nicaragua" },
    Country { code: "NE", name: "NIGER", display: "Niger" },
    Country { code: "NG", name: "NIGERIA", display: "Nigeria" },
    Country { code: "NU", name: "NIUE", display: "Niue" },
    Country { code: "NF", name: "NORFOLK_ISLAND", display: "Norfolk Island" },
    Country { code: "KP", name: "NORTH_KOREA", display: "North Korea" },
    Country { code: "MK", name: "NORTH_MACEDONIA", display: "North Macedonia" },
    Country { code: "MP", name: "NORTH_MARIANA_ISLANDS", display: "Northern Mariana Islands" },
    Country { code: "NO", name: "NORWAY", display: "Norway" },
    Country { code: "OM", name: "OMAN", display: "Oman" },
    Country { code: "PK", name: "PAKISTAN", display: "Pakistan" },
    Country { code: "PW", name: "PALAU", display: "Palau" },
    Country { code: "PS", name: "PALESTINE", display: "Palestine" },
    Country { code: "PA", name: "PANAMA", display: "Panama" },
    Country { code: "PG", name: "PAPUA_NEW_GUINEA", display: "Papua New Guinea" },
    Country { code: "PY", name: "PARAGUAY", display: "Paraguay" },
    Country { code: "PE", name: "PERU", display: "Peru" },
    Country { code: "PH", name: "PHILIPPINES", display: "Philippines" },
    Country { code: "PN", name: "PITCAIRN", display: "Pitcairn" },
    Country { code: "PL", name: "POLAND", display: "Poland" },
    Country { code: "PT", name: "PORTUGAL", display: "Portugal" },
    Country { code: "PR", name: "PUERTO_RICO", display: "Puerto Rico" },
    Country { code: "QA", name: "QATAR", display: "Qatar" },
    Country { code: "RE", name: "REUNION", display: "Reunion" },
    Country { code: "RO", name: "ROMANIA", display: "Romania" },
    Country { code: "RU", name: "RUSSIA", display: "Russian Federation" },
    Country { code: "RW", name: "RWANDA", display: "Rwanda" },
    Country { code: "BL", name: "SAINT_BARTHELEMY", display: "Saint Barthelemy" },
    Country { code: "SH", name: "SAINT_HELENA_ASCENSION_AND_TRISTAN_DA_CUNHA", display: "Saint Helena, Ascension and Tristan da Cunha" },
    Country { code: "KN", name: "SAINT_KITTS_AND_NEVIS", display: "Saint Kitts and Nevis" },
    Country { code: "LC", name: "SAINT_LUCIA", display: "Saint Lucia" },
    Country { code: "MF", name: "SAINT_MARTIN", display: "Saint Martin" },
    Country { code: "PM", name: "SAINT_PIERRE_AND_MIQUELON", display: "Saint Pierre and Miquelon" },
    Country { code: "VC", name: "SAINT_VINCENT_AND_THE_GRENADINES", display: "Saint Vincent and the Grenadines" },
    Country { code: "WS", name: "SAMOA", display: "Samoa" },
    Country { code: "SM", name: "SAN_MARINO", display: "San Marino" },
    Country { code: "ST", name: "SAO_TOME_AND_PRINCIPE", display: "Sao Tome and Principe" },
    Country { code: "SA", name: "SAUDI_ARABIA", display: "Saudi Arabia" },
    Country { code: "SN", name: "SENEGAL", display: "Senegal" },
    Country { code: "RS", name: "SERBIA", display: "Serbia" },
    Country { code: "SC", name: "SEYCHELLES", display: "Seychelles" },
    Country { code: "SL", name: "SIERRA_LEONE", display: "Sierra Leone" },
    Country { code: "SG", name: "SINGAPORE", display: "Singapore" },
    Country { code: "SX", name: "SINT_MAARTEN", display: "Sint Maarten" },
    Country { code: "SK", name: "SLOVAKIA", display: "Slovakia" },
    Country { code: "SI", name: "SLOVENIA", display: "Slovenia" },
    Country { code: "SB", name: "SOLOMON_ISLANDS", display: "Solomon Islands" },
    Country { code: "SO", name: "SOMALIA", display: "Somalia" },
    Country { code: "ZA", name: "SOUTH_AFRICA", display: "South Africa" },
    Country { code: "GS", name: "SOUTH_GEORGIA_AND_THE_SOUTH_SANDWICH_ISLANDS", display: "South Georgia and the South Sandwich Islands" },
    Country { code: "KR", name: "SOUTH_KOREA", display: "South Korea" },
    Country { code: "SS", name: "SOUTH_SUDAN", display: "South Sudan" },
    Country { code: "ES", name: "SPAIN", display: "Spain" },
    Country { code: "LK", name: "SRI_LANKA", display: "Sri Lanka" },
    Country { code: "SD", name: "SUDAN", display: "Sudan" },
    Country { code: "SR", name: "SURINAME", display: "Suriname" },
    Country { code: "SJ", name: "SVALBARD_AND_JAN_MAYEN", display: "Svalbard and Jan Mayen" },
    Country { code: "SE", name: "SWEDEN", display: "Sweden" },
    Country { code: "CH", name: "SWITZERLAND", display: "Switzerland" },
    Country { code: "SY", name: "SYRIA", display: "Syria" },
    Country { code: "TW", name: "TAIWAN", display: "Taiwan" },
    Country { code: "TJ", name: "TAJIKISTAN", display: "Tajikistan" },
    Country { code: "TZ", name: "TANZANIA", display: "Tanzania" },
    Country { code: "TH", name: "THAILAND", display: "Thailand" },
    Country { code: "TL", name: "TIMOR_LESTE", display: "Timor-Leste" },
    Country { code: "TG", name: "TOGO", display: "Togo" },
    Country { code: "TK", name: "TOKELAU", display: "Tokelau" },
    Country { code: "TO", name: "TONGA", display: "Tonga" },
    Country { code: "TT", name: "TRINIDAD_AND_TOBAGO", display: "Trinidad and Tobago" },
    Country { code: "TN", name: "TUNISIA", display: "Tunisia" },
    Country { code: "TR", name: "TURKEY", display: "Turkey" },
    Country { code: "TM", name: "TURKMENISTAN", display: "Turkmenistan" },
    Country { code: "TC", name: "TURKS_AND_CAICOS_ISLANDS", display: "Turks and Caicos Islands" },
    Country { code: "TV", name: "TUVALU", display: "Tuvalu" },
    Country { code: "UG", name: "UGANDA", display: "Uganda" },
    Country { code: "UA", name: "UKRAINE", display: "Ukraine" },
    Country { code: "AE", name: "UNITED_ARAB_EMIRATES", display: "United Arab Emirates" },
    Country { code: "GB", name: "UNITED_KINGDOM", display: "United Kingdom" },
    Country { code: "US", name: "UNITED_STATES", display: "United States" },
    Country { code: "VI", name: "UNITED_STATES_VIRGIN_ISLANDS", display: "United States Virgin Islands" },
    Country { code: "UY", name: "URUGUAY", display: "Uruguay" },
    Country { code: "UZ", name: "UZBEKISTAN", display: "Uzbekistan" },
    Country { code: "VU", name: "VANUATU", display: "Vanuatu" },
    Country { code: "VE", name: "VENEZUELA", display: "Venezuela" },
    Country { code: "VN", name: "VIETNAM", display: "Vietnam" },
    Country { code: "WF", name: "WALLIS_AND_FUTUNA", display: "Wallis and Futuna" },
    Country { code: "EH", name: "WESTERN_SAHARA", display: "Western Sahara" },
    Country { code: "YE", name: "YEMEN", display: "Yemen" },
    Country { code: "ZM", name: "ZAMBIA", display: "Zambia" },
    Country { code: "ZW", name: "ZIMBABWE", display: "Zimbabwe" },
];

/// Resolve a free-text country token against the table.
///
/// The token may be a 2-letter code, a symbolic name or a display name;
/// matching is case-insensitive and the first matching entry wins.
#[must_use]
pub fn resolve_country(token: &str) -> Option<&'static Country> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|country| {
        country.code.eq_ignore_ascii_case(token)
            || country.name.eq_ignore_ascii_case(token)
            || country.display.eq_ignore_ascii_case(token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_code() {
        assert_eq!(resolve_country("US").map(|c| c.code), Some("US"));
        assert_eq!(resolve_country("us").map(|c| c.code), Some("US"));
    }

    #[test]
    fn test_resolve_by_symbolic_name() {
        assert_eq!(resolve_country("UNITED_STATES").map(|c| c.code), Some("US"));
    }

    #[test]
    fn test_resolve_by_display_name() {
        assert_eq!(resolve_country("United States").map(|c| c.code), Some("US"));
        assert_eq!(resolve_country("Denmark").map(|c| c.code), Some("DK"));
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        assert_eq!(resolve_country("Atlantis"), None);
        assert_eq!(resolve_country(""), None);
        assert_eq!(resolve_country("   "), None);
    }
}

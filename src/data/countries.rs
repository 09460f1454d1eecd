//! Country name → ISO 3166-1 alpha-3 resolution.
//!
//! Lookup is a case-insensitive exact match against a compiled-in reference
//! table. Each entry matches on its alpha-2, alpha-3 and numeric codes, its
//! short name, and a list of aliases (official names, common names, former
//! names and the spellings used by the World Bank, e.g. `"Korea, Rep."`).
//! Regional aggregates such as `"World"` or `"Euro area"` have no entry and
//! resolve to [`Resolution::Unresolved`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A three-letter ISO 3166-1 alpha-3 code.
///
/// Only obtainable through [`resolve`], so it always refers to an entry of
/// the reference table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso3(&'static CountryIdentity);

impl Iso3 {
    pub fn as_str(&self) -> &'static str {
        self.0.alpha3
    }

    /// The reference entry behind this code.
    pub fn identity(&self) -> &'static CountryIdentity {
        self.0
    }
}

impl fmt::Debug for Iso3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iso3").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Iso3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialOrd for Iso3 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iso3 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Serialize for Iso3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Outcome of [`resolve`]. `Unresolved` is a normal result: callers drop the
/// row rather than abort the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Resolved(Iso3),
    Unresolved,
}

impl Resolution {
    pub fn iso3(self) -> Option<Iso3> {
        match self {
            Resolution::Resolved(code) => Some(code),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Continent used to place a country on a regional map.
///
/// Central America and the Caribbean count as North America; transcontinental
/// states are placed once (Russia in Europe, Türkiye in Asia).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Continent {
    Africa,
    Antarctica,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

/// One row of the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryIdentity {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub numeric: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub continent: Continent,
}

impl CountryIdentity {

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        [self.alpha2, self.alpha3, self.numeric, self.name]
            .into_iter()
            .chain(aliases.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Resolve a display name (or code) to its ISO alpha-3 code.
pub fn resolve(name: &str) -> Resolution {
    match lookup(name) {
        Some(country) => Resolution::Resolved(Iso3(country)),
        None => Resolution::Unresolved,
    }
}

/// Find the reference entry for a name, alias or code.
pub fn lookup(name: &str) -> Option<&'static CountryIdentity> {
    index().get(&normalize(name)).map(|&idx| &COUNTRIES[idx])
}

/// Find the reference entry for an alpha-3 code.
pub fn identity(iso3: &str) -> Option<&'static CountryIdentity> {
    COUNTRIES
        .iter()
        .find(|c| c.alpha3.eq_ignore_ascii_case(iso3.trim()))
}

/// The complete reference table.
pub fn all() -> &'static [CountryIdentity] {
    COUNTRIES
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// normalized key → position in [`COUNTRIES`], built on first use.
fn index() -> &'static BTreeMap<String, usize> {
    static INDEX: OnceLock<BTreeMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = BTreeMap::new();
        for (idx, country) in COUNTRIES.iter().enumerate() {
            for key in country.keys() {
                index.entry(normalize(key)).or_insert(idx);
            }
        }
        index
    })
}

// ============================================================================
// STATIC REFERENCE DATA
// ============================================================================

const fn c(
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    continent: Continent,
) -> CountryIdentity {
    CountryIdentity {
        alpha2,
        alpha3,
        numeric,
        name,
        aliases,
        continent,
    }
}

use Continent::{Africa, Antarctica, Asia, Europe, NorthAmerica, Oceania, SouthAmerica};

/// ISO 3166-1, 249 entries, ordered by short name.
const COUNTRIES: &[CountryIdentity] = &[
    c("AF", "AFG", "004", "Afghanistan", &["Islamic Republic of Afghanistan"], Asia),
    c("AX", "ALA", "248", "Åland Islands", &["Aland Islands"], Europe),
    c("AL", "ALB", "008", "Albania", &["Republic of Albania"], Europe),
    c("DZ", "DZA", "012", "Algeria", &["People's Democratic Republic of Algeria"], Africa),
    c("AS", "ASM", "016", "American Samoa", &[], Oceania),
    c("AD", "AND", "020", "Andorra", &["Principality of Andorra"], Europe),
    c("AO", "AGO", "024", "Angola", &["Republic of Angola"], Africa),
    c("AI", "AIA", "660", "Anguilla", &[], NorthAmerica),
    c("AQ", "ATA", "010", "Antarctica", &[], Antarctica),
    c("AG", "ATG", "028", "Antigua and Barbuda", &[], NorthAmerica),
    c("AR", "ARG", "032", "Argentina", &["Argentine Republic"], SouthAmerica),
    c("AM", "ARM", "051", "Armenia", &["Republic of Armenia"], Asia),
    c("AW", "ABW", "533", "Aruba", &[], NorthAmerica),
    c("AU", "AUS", "036", "Australia", &[], Oceania),
    c("AT", "AUT", "040", "Austria", &["Republic of Austria"], Europe),
    c("AZ", "AZE", "031", "Azerbaijan", &["Republic of Azerbaijan"], Asia),
    c("BS", "BHS", "044", "Bahamas", &["Commonwealth of the Bahamas", "Bahamas, The", "The Bahamas"], NorthAmerica),
    c("BH", "BHR", "048", "Bahrain", &["Kingdom of Bahrain"], Asia),
    c("BD", "BGD", "050", "Bangladesh", &["People's Republic of Bangladesh"], Asia),
    c("BB", "BRB", "052", "Barbados", &[], NorthAmerica),
    c("BY", "BLR", "112", "Belarus", &["Republic of Belarus"], Europe),
    c("BE", "BEL", "056", "Belgium", &["Kingdom of Belgium"], Europe),
    c("BZ", "BLZ", "084", "Belize", &[], NorthAmerica),
    c("BJ", "BEN", "204", "Benin", &["Republic of Benin", "Dahomey"], Africa),
    c("BM", "BMU", "060", "Bermuda", &[], NorthAmerica),
    c("BT", "BTN", "064", "Bhutan", &["Kingdom of Bhutan"], Asia),
    c("BO", "BOL", "068", "Bolivia, Plurinational State of", &["Plurinational State of Bolivia", "Bolivia"], SouthAmerica),
    c("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba", &["Caribbean Netherlands"], NorthAmerica),
    c("BA", "BIH", "070", "Bosnia and Herzegovina", &["Republic of Bosnia and Herzegovina"], Europe),
    c("BW", "BWA", "072", "Botswana", &["Republic of Botswana"], Africa),
    c("BV", "BVT", "074", "Bouvet Island", &[], Antarctica),
    c("BR", "BRA", "076", "Brazil", &["Federative Republic of Brazil"], SouthAmerica),
    c("IO", "IOT", "086", "British Indian Ocean Territory", &[], Asia),
    c("BN", "BRN", "096", "Brunei Darussalam", &["Brunei"], Asia),
    c("BG", "BGR", "100", "Bulgaria", &["Republic of Bulgaria"], Europe),
    c("BF", "BFA", "854", "Burkina Faso", &["Upper Volta"], Africa),
    c("BI", "BDI", "108", "Burundi", &["Republic of Burundi"], Africa),
    c("CV", "CPV", "132", "Cabo Verde", &["Republic of Cabo Verde", "Cape Verde"], Africa),
    c("KH", "KHM", "116", "Cambodia", &["Kingdom of Cambodia"], Asia),
    c("CM", "CMR", "120", "Cameroon", &["Republic of Cameroon"], Africa),
    c("CA", "CAN", "124", "Canada", &[], NorthAmerica),
    c("KY", "CYM", "136", "Cayman Islands", &[], NorthAmerica),
    c("CF", "CAF", "140", "Central African Republic", &[], Africa),
    c("TD", "TCD", "148", "Chad", &["Republic of Chad"], Africa),
    c("CL", "CHL", "152", "Chile", &["Republic of Chile"], SouthAmerica),
    c("CN", "CHN", "156", "China", &["People's Republic of China"], Asia),
    c("CX", "CXR", "162", "Christmas Island", &[], Oceania),
    c("CC", "CCK", "166", "Cocos (Keeling) Islands", &[], Oceania),
    c("CO", "COL", "170", "Colombia", &["Republic of Colombia"], SouthAmerica),
    c("KM", "COM", "174", "Comoros", &["Union of the Comoros"], Africa),
    c("CG", "COG", "178", "Congo", &["Republic of the Congo", "Congo, Rep."], Africa),
    c("CD", "COD", "180", "Congo, The Democratic Republic of the", &["Democratic Republic of the Congo", "Congo, Dem. Rep.", "Zaire"], Africa),
    c("CK", "COK", "184", "Cook Islands", &[], Oceania),
    c("CR", "CRI", "188", "Costa Rica", &["Republic of Costa Rica"], NorthAmerica),
    c("CI", "CIV", "384", "Côte d'Ivoire", &["Republic of Côte d'Ivoire", "Cote d'Ivoire", "Ivory Coast"], Africa),
    c("HR", "HRV", "191", "Croatia", &["Republic of Croatia"], Europe),
    c("CU", "CUB", "192", "Cuba", &["Republic of Cuba"], NorthAmerica),
    c("CW", "CUW", "531", "Curaçao", &["Curacao"], NorthAmerica),
    c("CY", "CYP", "196", "Cyprus", &["Republic of Cyprus"], Europe),
    c("CZ", "CZE", "203", "Czechia", &["Czech Republic"], Europe),
    c("DK", "DNK", "208", "Denmark", &["Kingdom of Denmark"], Europe),
    c("DJ", "DJI", "262", "Djibouti", &["Republic of Djibouti"], Africa),
    c("DM", "DMA", "212", "Dominica", &["Commonwealth of Dominica"], NorthAmerica),
    c("DO", "DOM", "214", "Dominican Republic", &[], NorthAmerica),
    c("EC", "ECU", "218", "Ecuador", &["Republic of Ecuador"], SouthAmerica),
    c("EG", "EGY", "818", "Egypt", &["Arab Republic of Egypt", "Egypt, Arab Rep."], Africa),
    c("SV", "SLV", "222", "El Salvador", &["Republic of El Salvador"], NorthAmerica),
    c("GQ", "GNQ", "226", "Equatorial Guinea", &["Republic of Equatorial Guinea"], Africa),
    c("ER", "ERI", "232", "Eritrea", &["the State of Eritrea"], Africa),
    c("EE", "EST", "233", "Estonia", &["Republic of Estonia"], Europe),
    c("SZ", "SWZ", "748", "Eswatini", &["Kingdom of Eswatini", "Swaziland"], Africa),
    c("ET", "ETH", "231", "Ethiopia", &["Federal Democratic Republic of Ethiopia"], Africa),
    c("FK", "FLK", "238", "Falkland Islands (Malvinas)", &["Falkland Islands"], SouthAmerica),
    c("FO", "FRO", "234", "Faroe Islands", &[], Europe),
    c("FJ", "FJI", "242", "Fiji", &["Republic of Fiji"], Oceania),
    c("FI", "FIN", "246", "Finland", &["Republic of Finland"], Europe),
    c("FR", "FRA", "250", "France", &["French Republic"], Europe),
    c("GF", "GUF", "254", "French Guiana", &[], SouthAmerica),
    c("PF", "PYF", "258", "French Polynesia", &[], Oceania),
    c("TF", "ATF", "260", "French Southern Territories", &[], Antarctica),
    c("GA", "GAB", "266", "Gabon", &["Gabonese Republic"], Africa),
    c("GM", "GMB", "270", "Gambia", &["Republic of the Gambia", "Gambia, The", "The Gambia"], Africa),
    c("GE", "GEO", "268", "Georgia", &[], Asia),
    c("DE", "DEU", "276", "Germany", &["Federal Republic of Germany"], Europe),
    c("GH", "GHA", "288", "Ghana", &["Republic of Ghana"], Africa),
    c("GI", "GIB", "292", "Gibraltar", &[], Europe),
    c("GR", "GRC", "300", "Greece", &["Hellenic Republic"], Europe),
    c("GL", "GRL", "304", "Greenland", &[], NorthAmerica),
    c("GD", "GRD", "308", "Grenada", &[], NorthAmerica),
    c("GP", "GLP", "312", "Guadeloupe", &[], NorthAmerica),
    c("GU", "GUM", "316", "Guam", &[], Oceania),
    c("GT", "GTM", "320", "Guatemala", &["Republic of Guatemala"], NorthAmerica),
    c("GG", "GGY", "831", "Guernsey", &[], Europe),
    c("GN", "GIN", "324", "Guinea", &["Republic of Guinea"], Africa),
    c("GW", "GNB", "624", "Guinea-Bissau", &["Republic of Guinea-Bissau"], Africa),
    c("GY", "GUY", "328", "Guyana", &["Republic of Guyana"], SouthAmerica),
    c("HT", "HTI", "332", "Haiti", &["Republic of Haiti"], NorthAmerica),
    c("HM", "HMD", "334", "Heard Island and McDonald Islands", &[], Antarctica),
    c("VA", "VAT", "336", "Holy See (Vatican City State)", &["Holy See", "Vatican City"], Europe),
    c("HN", "HND", "340", "Honduras", &["Republic of Honduras"], NorthAmerica),
    c("HK", "HKG", "344", "Hong Kong", &["Hong Kong Special Administrative Region of China", "Hong Kong SAR, China"], Asia),
    c("HU", "HUN", "348", "Hungary", &[], Europe),
    c("IS", "ISL", "352", "Iceland", &["Republic of Iceland"], Europe),
    c("IN", "IND", "356", "India", &["Republic of India"], Asia),
    c("ID", "IDN", "360", "Indonesia", &["Republic of Indonesia"], Asia),
    c("IR", "IRN", "364", "Iran, Islamic Republic of", &["Islamic Republic of Iran", "Iran", "Iran, Islamic Rep."], Asia),
    c("IQ", "IRQ", "368", "Iraq", &["Republic of Iraq"], Asia),
    c("IE", "IRL", "372", "Ireland", &[], Europe),
    c("IM", "IMN", "833", "Isle of Man", &[], Europe),
    c("IL", "ISR", "376", "Israel", &["State of Israel"], Asia),
    c("IT", "ITA", "380", "Italy", &["Italian Republic"], Europe),
    c("JM", "JAM", "388", "Jamaica", &[], NorthAmerica),
    c("JP", "JPN", "392", "Japan", &[], Asia),
    c("JE", "JEY", "832", "Jersey", &[], Europe),
    c("JO", "JOR", "400", "Jordan", &["Hashemite Kingdom of Jordan"], Asia),
    c("KZ", "KAZ", "398", "Kazakhstan", &["Republic of Kazakhstan"], Asia),
    c("KE", "KEN", "404", "Kenya", &["Republic of Kenya"], Africa),
    c("KI", "KIR", "296", "Kiribati", &["Republic of Kiribati"], Oceania),
    c("KP", "PRK", "408", "Korea, Democratic People's Republic of", &["Democratic People's Republic of Korea", "North Korea", "Korea, Dem. People's Rep."], Asia),
    c("KR", "KOR", "410", "Korea, Republic of", &["South Korea", "Korea, Rep."], Asia),
    c("KW", "KWT", "414", "Kuwait", &["State of Kuwait"], Asia),
    c("KG", "KGZ", "417", "Kyrgyzstan", &["Kyrgyz Republic"], Asia),
    c("LA", "LAO", "418", "Lao People's Democratic Republic", &["Laos", "Lao PDR"], Asia),
    c("LV", "LVA", "428", "Latvia", &["Republic of Latvia"], Europe),
    c("LB", "LBN", "422", "Lebanon", &["Lebanese Republic"], Asia),
    c("LS", "LSO", "426", "Lesotho", &["Kingdom of Lesotho"], Africa),
    c("LR", "LBR", "430", "Liberia", &["Republic of Liberia"], Africa),
    c("LY", "LBY", "434", "Libya", &["State of Libya"], Africa),
    c("LI", "LIE", "438", "Liechtenstein", &["Principality of Liechtenstein"], Europe),
    c("LT", "LTU", "440", "Lithuania", &["Republic of Lithuania"], Europe),
    c("LU", "LUX", "442", "Luxembourg", &["Grand Duchy of Luxembourg"], Europe),
    c("MO", "MAC", "446", "Macao", &["Macao Special Administrative Region of China", "Macau", "Macao SAR, China"], Asia),
    c("MG", "MDG", "450", "Madagascar", &["Republic of Madagascar"], Africa),
    c("MW", "MWI", "454", "Malawi", &["Republic of Malawi"], Africa),
    c("MY", "MYS", "458", "Malaysia", &[], Asia),
    c("MV", "MDV", "462", "Maldives", &["Republic of Maldives"], Asia),
    c("ML", "MLI", "466", "Mali", &["Republic of Mali"], Africa),
    c("MT", "MLT", "470", "Malta", &["Republic of Malta"], Europe),
    c("MH", "MHL", "584", "Marshall Islands", &["Republic of the Marshall Islands"], Oceania),
    c("MQ", "MTQ", "474", "Martinique", &[], NorthAmerica),
    c("MR", "MRT", "478", "Mauritania", &["Islamic Republic of Mauritania"], Africa),
    c("MU", "MUS", "480", "Mauritius", &["Republic of Mauritius"], Africa),
    c("YT", "MYT", "175", "Mayotte", &[], Africa),
    c("MX", "MEX", "484", "Mexico", &["United Mexican States"], NorthAmerica),
    c("FM", "FSM", "583", "Micronesia, Federated States of", &["Federated States of Micronesia", "Micronesia", "Micronesia, Fed. Sts."], Oceania),
    c("MD", "MDA", "498", "Moldova, Republic of", &["Republic of Moldova", "Moldova"], Europe),
    c("MC", "MCO", "492", "Monaco", &["Principality of Monaco"], Europe),
    c("MN", "MNG", "496", "Mongolia", &[], Asia),
    c("ME", "MNE", "499", "Montenegro", &[], Europe),
    c("MS", "MSR", "500", "Montserrat", &[], NorthAmerica),
    c("MA", "MAR", "504", "Morocco", &["Kingdom of Morocco"], Africa),
    c("MZ", "MOZ", "508", "Mozambique", &["Republic of Mozambique"], Africa),
    c("MM", "MMR", "104", "Myanmar", &["Republic of Myanmar", "Burma"], Asia),
    c("NA", "NAM", "516", "Namibia", &["Republic of Namibia"], Africa),
    c("NR", "NRU", "520", "Nauru", &["Republic of Nauru"], Oceania),
    c("NP", "NPL", "524", "Nepal", &["Federal Democratic Republic of Nepal"], Asia),
    c("NL", "NLD", "528", "Netherlands", &["Netherlands, Kingdom of the", "Kingdom of the Netherlands"], Europe),
    c("NC", "NCL", "540", "New Caledonia", &[], Oceania),
    c("NZ", "NZL", "554", "New Zealand", &[], Oceania),
    c("NI", "NIC", "558", "Nicaragua", &["Republic of Nicaragua"], NorthAmerica),
    c("NE", "NER", "562", "Niger", &["Republic of the Niger"], Africa),
    c("NG", "NGA", "566", "Nigeria", &["Federal Republic of Nigeria"], Africa),
    c("NU", "NIU", "570", "Niue", &[], Oceania),
    c("NF", "NFK", "574", "Norfolk Island", &[], Oceania),
    c("MK", "MKD", "807", "North Macedonia", &["Republic of North Macedonia", "Macedonia, FYR"], Europe),
    c("MP", "MNP", "580", "Northern Mariana Islands", &["Commonwealth of the Northern Mariana Islands"], Oceania),
    c("NO", "NOR", "578", "Norway", &["Kingdom of Norway"], Europe),
    c("OM", "OMN", "512", "Oman", &["Sultanate of Oman"], Asia),
    c("PK", "PAK", "586", "Pakistan", &["Islamic Republic of Pakistan"], Asia),
    c("PW", "PLW", "585", "Palau", &["Republic of Palau"], Oceania),
    c("PS", "PSE", "275", "Palestine, State of", &["the State of Palestine", "West Bank and Gaza"], Asia),
    c("PA", "PAN", "591", "Panama", &["Republic of Panama"], NorthAmerica),
    c("PG", "PNG", "598", "Papua New Guinea", &["Independent State of Papua New Guinea"], Oceania),
    c("PY", "PRY", "600", "Paraguay", &["Republic of Paraguay"], SouthAmerica),
    c("PE", "PER", "604", "Peru", &["Republic of Peru"], SouthAmerica),
    c("PH", "PHL", "608", "Philippines", &["Republic of the Philippines"], Asia),
    c("PN", "PCN", "612", "Pitcairn", &[], Oceania),
    c("PL", "POL", "616", "Poland", &["Republic of Poland"], Europe),
    c("PT", "PRT", "620", "Portugal", &["Portuguese Republic"], Europe),
    c("PR", "PRI", "630", "Puerto Rico", &["Puerto Rico (US)"], NorthAmerica),
    c("QA", "QAT", "634", "Qatar", &["State of Qatar"], Asia),
    c("RE", "REU", "638", "Réunion", &["Reunion"], Africa),
    c("RO", "ROU", "642", "Romania", &[], Europe),
    c("RU", "RUS", "643", "Russian Federation", &["Russia"], Europe),
    c("RW", "RWA", "646", "Rwanda", &["Rwandese Republic"], Africa),
    c("BL", "BLM", "652", "Saint Barthélemy", &["Saint Barthelemy"], NorthAmerica),
    c("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha", &["Saint Helena"], Africa),
    c("KN", "KNA", "659", "Saint Kitts and Nevis", &["St. Kitts and Nevis"], NorthAmerica),
    c("LC", "LCA", "662", "Saint Lucia", &["St. Lucia"], NorthAmerica),
    c("MF", "MAF", "663", "Saint Martin (French part)", &["St. Martin (French part)"], NorthAmerica),
    c("PM", "SPM", "666", "Saint Pierre and Miquelon", &[], NorthAmerica),
    c("VC", "VCT", "670", "Saint Vincent and the Grenadines", &["St. Vincent and the Grenadines"], NorthAmerica),
    c("WS", "WSM", "882", "Samoa", &["Independent State of Samoa", "Western Samoa"], Oceania),
    c("SM", "SMR", "674", "San Marino", &["Republic of San Marino"], Europe),
    c("ST", "STP", "678", "Sao Tome and Principe", &["Democratic Republic of Sao Tome and Principe"], Africa),
    c("SA", "SAU", "682", "Saudi Arabia", &["Kingdom of Saudi Arabia"], Asia),
    c("SN", "SEN", "686", "Senegal", &["Republic of Senegal"], Africa),
    c("RS", "SRB", "688", "Serbia", &["Republic of Serbia"], Europe),
    c("SC", "SYC", "690", "Seychelles", &["Republic of Seychelles"], Africa),
    c("SL", "SLE", "694", "Sierra Leone", &["Republic of Sierra Leone"], Africa),
    c("SG", "SGP", "702", "Singapore", &["Republic of Singapore"], Asia),
    c("SX", "SXM", "534", "Sint Maarten (Dutch part)", &[], NorthAmerica),
    c("SK", "SVK", "703", "Slovakia", &["Slovak Republic"], Europe),
    c("SI", "SVN", "705", "Slovenia", &["Republic of Slovenia"], Europe),
    c("SB", "SLB", "090", "Solomon Islands", &[], Oceania),
    c("SO", "SOM", "706", "Somalia", &["Federal Republic of Somalia", "Somalia, Fed. Rep."], Africa),
    c("ZA", "ZAF", "710", "South Africa", &["Republic of South Africa"], Africa),
    c("GS", "SGS", "239", "South Georgia and the South Sandwich Islands", &[], Antarctica),
    c("SS", "SSD", "728", "South Sudan", &["Republic of South Sudan"], Africa),
    c("ES", "ESP", "724", "Spain", &["Kingdom of Spain"], Europe),
    c("LK", "LKA", "144", "Sri Lanka", &["Democratic Socialist Republic of Sri Lanka", "Ceylon"], Asia),
    c("SD", "SDN", "729", "Sudan", &["Republic of the Sudan"], Africa),
    c("SR", "SUR", "740", "Suriname", &["Republic of Suriname"], SouthAmerica),
    c("SJ", "SJM", "744", "Svalbard and Jan Mayen", &[], Europe),
    c("SE", "SWE", "752", "Sweden", &["Kingdom of Sweden"], Europe),
    c("CH", "CHE", "756", "Switzerland", &["Swiss Confederation"], Europe),
    c("SY", "SYR", "760", "Syrian Arab Republic", &["Syria"], Asia),
    c("TW", "TWN", "158", "Taiwan, Province of China", &["Taiwan", "Taiwan, China"], Asia),
    c("TJ", "TJK", "762", "Tajikistan", &["Republic of Tajikistan"], Asia),
    c("TZ", "TZA", "834", "Tanzania, United Republic of", &["United Republic of Tanzania", "Tanzania"], Africa),
    c("TH", "THA", "764", "Thailand", &["Kingdom of Thailand"], Asia),
    c("TL", "TLS", "626", "Timor-Leste", &["Democratic Republic of Timor-Leste", "East Timor"], Asia),
    c("TG", "TGO", "768", "Togo", &["Togolese Republic"], Africa),
    c("TK", "TKL", "772", "Tokelau", &[], Oceania),
    c("TO", "TON", "776", "Tonga", &["Kingdom of Tonga"], Oceania),
    c("TT", "TTO", "780", "Trinidad and Tobago", &["Republic of Trinidad and Tobago"], NorthAmerica),
    c("TN", "TUN", "788", "Tunisia", &["Republic of Tunisia"], Africa),
    c("TR", "TUR", "792", "Türkiye", &["Republic of Türkiye", "Turkiye", "Turkey"], Asia),
    c("TM", "TKM", "795", "Turkmenistan", &[], Asia),
    c("TC", "TCA", "796", "Turks and Caicos Islands", &[], NorthAmerica),
    c("TV", "TUV", "798", "Tuvalu", &[], Oceania),
    c("UG", "UGA", "800", "Uganda", &["Republic of Uganda"], Africa),
    c("UA", "UKR", "804", "Ukraine", &[], Europe),
    c("AE", "ARE", "784", "United Arab Emirates", &[], Asia),
    c("GB", "GBR", "826", "United Kingdom", &["United Kingdom of Great Britain and Northern Ireland", "Great Britain"], Europe),
    c("US", "USA", "840", "United States", &["United States of America"], NorthAmerica),
    c("UM", "UMI", "581", "United States Minor Outlying Islands", &[], Oceania),
    c("UY", "URY", "858", "Uruguay", &["Eastern Republic of Uruguay"], SouthAmerica),
    c("UZ", "UZB", "860", "Uzbekistan", &["Republic of Uzbekistan"], Asia),
    c("VU", "VUT", "548", "Vanuatu", &["Republic of Vanuatu"], Oceania),
    c("VE", "VEN", "862", "Venezuela, Bolivarian Republic of", &["Bolivarian Republic of Venezuela", "Venezuela", "Venezuela, RB"], SouthAmerica),
    c("VN", "VNM", "704", "Viet Nam", &["Socialist Republic of Viet Nam", "Vietnam"], Asia),
    c("VG", "VGB", "092", "Virgin Islands, British", &["British Virgin Islands"], NorthAmerica),
    c("VI", "VIR", "850", "Virgin Islands, U.S.", &["Virgin Islands of the United States", "Virgin Islands (U.S.)"], NorthAmerica),
    c("WF", "WLF", "876", "Wallis and Futuna", &[], Oceania),
    c("EH", "ESH", "732", "Western Sahara", &[], Africa),
    c("YE", "YEM", "887", "Yemen", &["Republic of Yemen", "Yemen, Rep."], Asia),
    c("ZM", "ZMB", "894", "Zambia", &["Republic of Zambia", "Northern Rhodesia"], Africa),
    c("ZW", "ZWE", "716", "Zimbabwe", &["Republic of Zimbabwe", "Rhodesia"], Africa),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn resolves_short_names() {
        assert_eq!(resolve("United States").iso3().map(|c| c.as_str()), Some("USA"));
        assert_eq!(resolve("Germany").iso3().map(|c| c.as_str()), Some("DEU"));
    }

    #[test]
    fn unknown_name_is_unresolved() {
        assert_eq!(resolve("Not A Country"), Resolution::Unresolved);
        assert_eq!(resolve(""), Resolution::Unresolved);
    }

    #[test]
    fn aggregates_are_unresolved() {
        for name in ["World", "Euro area", "High income", "Sub-Saharan Africa", "Kosovo"] {
            assert!(!resolve(name).is_resolved(), "{name} should not resolve");
        }
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_space() {
        assert_eq!(resolve("  united states "), resolve("United States"));
        assert_eq!(resolve("CÔTE D'IVOIRE").iso3().map(|c| c.as_str()), Some("CIV"));
    }

    #[test]
    fn codes_resolve_to_themselves() {
        assert_eq!(resolve("fra").iso3().map(|c| c.as_str()), Some("FRA"));
        assert_eq!(resolve("FR").iso3().map(|c| c.as_str()), Some("FRA"));
        assert_eq!(resolve("250").iso3().map(|c| c.as_str()), Some("FRA"));
    }

    #[test]
    fn world_bank_spellings_resolve() {
        let cases = [
            ("Korea, Rep.", "KOR"),
            ("Egypt, Arab Rep.", "EGY"),
            ("Iran, Islamic Rep.", "IRN"),
            ("Venezuela, RB", "VEN"),
            ("Turkiye", "TUR"),
            ("Slovak Republic", "SVK"),
            ("Hong Kong SAR, China", "HKG"),
            ("West Bank and Gaza", "PSE"),
            ("Congo, Dem. Rep.", "COD"),
            ("Congo, Rep.", "COG"),
        ];
        for (name, code) in cases {
            assert_eq!(resolve(name).iso3().map(|c| c.as_str()), Some(code), "{name}");
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        for name in ["United States", "Atlantis", "Viet Nam"] {
            assert_eq!(resolve(name), resolve(name));
        }
    }

    #[test]
    fn reference_codes_are_unique_and_well_formed() {
        let mut alpha3 = BTreeSet::new();
        let mut alpha2 = BTreeSet::new();
        for country in all() {
            assert_eq!(country.alpha3.len(), 3);
            assert!(country.alpha3.bytes().all(|b| b.is_ascii_uppercase()));
            assert_eq!(country.alpha2.len(), 2);
            assert_eq!(country.numeric.len(), 3);
            assert!(alpha3.insert(country.alpha3), "duplicate {}", country.alpha3);
            assert!(alpha2.insert(country.alpha2), "duplicate {}", country.alpha2);
        }
        assert_eq!(all().len(), 249);
    }

    #[test]
    fn identity_finds_continent() {
        let us = identity("usa").unwrap();
        assert_eq!(us.name, "United States");
        assert_eq!(us.continent, Continent::NorthAmerica);
        assert!(identity("XKX").is_none());
    }
}

//! Static reference data and the reference puzzle configuration: the
//! airport and airline tables, the two agent profiles, the designated
//! solution destinations and the default population parameters.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::data::{AgentProfile, Airline, Airport, DesignatedMeet, PuzzleConfig};
use crate::populate::{date_range, PopulationParams};

fn airport(iata: &str, name: &str, city: &str, latitude: f64, longitude: f64) -> Airport {
    Airport {
        iata: iata.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        latitude,
        longitude,
    }
}

pub fn reference_airports() -> Vec<Airport> {
    vec![
        // north america
        airport("YYZ", "Toronto Pearson International Airport", "Toronto", 43.6777, -79.6248),
        airport("YVR", "Vancouver International Airport", "Vancouver", 49.1947, -123.1792),
        airport("JFK", "John F. Kennedy International Airport", "New York", 40.6413, -73.7781),
        airport("LAX", "Los Angeles International Airport", "Los Angeles", 33.9416, -118.4085),
        airport("ORD", "O'Hare International Airport", "Chicago", 40.9762, -87.9073),
        airport("DFW", "Dallas/Fort Worth International Airport", "Dallas", 32.8998, -97.0403),
        airport("BOS", "Boston Logan International Airport", "Boston", 42.3656, -71.0096),
        airport("DCA", "Ronald Reagan Washington National Airport", "Washington", 38.8512, -77.0402),
        // europe
        airport("LHR", "Heathrow Airport", "London", 51.4700, -0.4543),
        airport("CDG", "Charles de Gaulle Airport", "Paris", 49.0097, 2.5479),
        airport("AMS", "Schiphol Airport", "Amsterdam", 52.3105, 4.7683),
        airport("FRA", "Frankfurt am Main Airport", "Frankfurt", 50.0379, 8.5622),
        airport("MAD", "Adolfo Suárez Madrid–Barajas Airport", "Madrid", 40.4722, -3.5608),
        airport("ZRH", "Zurich Airport", "Zurich", 47.4581, 8.5550),
        airport("LIS", "Humberto Delgado Airport", "Lisbon", 38.7742, -9.1342),
        airport("VIE", "Vienna International Airport", "Vienna", 48.1103, 16.5697),
        airport("PRG", "Václav Havel Airport Prague", "Prague", 50.1008, 14.2632),
        airport("WAW", "Warsaw Chopin Airport", "Warsaw", 52.1657, 20.9671),
        airport("BUD", "Budapest Ferenc Liszt International", "Budapest", 47.4298, 19.2610),
        airport("SVO", "Sheremetyevo International Airport", "Moscow", 55.9728, 37.4147),
        airport("FCO", "Leonardo da Vinci International Airport", "Rome", 42.3601, 12.2429),
        airport("ARN", "Stockholm Arlanda Airport", "Stockholm", 59.6519, 17.9186),
        // middle east
        airport("DXB", "Dubai International Airport", "Dubai", 25.2532, 55.3657),
        airport("DOH", "Hamad International Airport", "Doha", 25.2731, 51.6080),
        airport("TLV", "Ben Gurion Airport", "Tel Aviv", 32.0004, 34.8706),
        // south america
        airport("GRU", "São Paulo/Guarulhos International Airport", "São Paulo", -23.4356, -46.4731),
        airport("EZE", "Ezeiza International Airport", "Buenos Aires", -34.8222, -58.5358),
        airport("BOG", "El Dorado International Airport", "Bogotá", 4.7016, -74.1469),
        airport("LIM", "Jorge Chávez International Airport", "Lima", -12.0219, -77.1143),
        airport("SCL", "Arturo Merino Benítez International Airport", "Santiago", -33.3928, -70.7856),
        airport("GIG", "Rio de Janeiro/Galeão International Airport", "Rio de Janeiro", -22.8099, -43.2506),
        // africa
        airport("CAI", "Cairo International Airport", "Cairo", 30.1219, 31.4056),
        airport("JNB", "O.R. Tambo International Airport", "Johannesburg", -26.1392, 28.2460),
        airport("CMN", "Mohammed V International Airport", "Casablanca", 33.3675, -7.5897),
        airport("NBO", "Jomo Kenyatta International Airport", "Nairobi", -1.3192, 36.9278),
        // asia
        airport("NRT", "Narita International Airport", "Tokyo", 35.7647, 140.3864),
        airport("ICN", "Incheon International Airport", "Seoul", 37.4602, 126.4407),
        airport("PEK", "Beijing Capital International Airport", "Beijing", 39.5098, 116.4105),
        airport("PVG", "Shanghai Pudong International Airport", "Shanghai", 31.1443, 121.8083),
        airport("SIN", "Singapore Changi Airport", "Singapore", 1.3644, 103.9915),
        airport("BKK", "Suvarnabhumi Airport", "Bangkok", 13.6900, 100.7501),
        airport("DEL", "Indira Gandhi International Airport", "New Delhi", 28.5562, 77.1000),
        airport("MNL", "Ninoy Aquino International Airport", "Manila", 14.5086, 121.0194),
        airport("HKG", "Hong Kong International Airport", "Hong Kong", 22.3080, 113.9185),
        airport("KUL", "Kuala Lumpur International Airport", "Kuala Lumpur", 2.7456, 101.7072),
        airport("CGK", "Soekarno-Hatta International Airport", "Jakarta", -6.1256, 106.6558),
        airport("BOM", "Chhatrapati Shivaji Maharaj International Airport", "Mumbai", 19.0896, 72.8656),
        airport("HAN", "Noi Bai International Airport", "Hanoi", 21.2187, 105.8047),
        airport("TPE", "Taoyuan International Airport", "Taipei", 25.0777, 121.2322),
        airport("IKA", "Imam Khomeini International Airport", "Tehran", 35.4161, 51.1522),
        airport("KIX", "Kansai International Airport", "Osaka", 34.4320, 135.2304),
        airport("BLR", "Kempegowda International Airport", "Bangalore", 13.1986, 77.7066),
        airport("CAN", "Guangzhou Baiyun International Airport", "Guangzhou", 23.3924, 113.2988),
        airport("CTU", "Chengdu Shuangliu International Airport", "Chengdu", 30.5785, 103.9467),
        // australia
        airport("SYD", "Sydney Kingsford Smith Airport", "Sydney", -33.9399, 151.1753),
        airport("PER", "Perth Airport", "Perth", -31.9403, 115.9669),
        // new zealand
        airport("AKL", "Auckland Airport", "Auckland", -37.0082, 174.7850),
    ]
}

fn airline(code: &str, name: &str, continent: &str) -> Airline {
    Airline {
        code: code.to_string(),
        name: name.to_string(),
        continent: continent.to_string(),
    }
}

pub fn reference_airlines() -> Vec<Airline> {
    vec![
        airline("AA", "American Airlines", "north america"),
        airline("LH", "Lufthansa", "europe"),
        airline("LA", "LATAM Airlines", "south america"),
        airline("ET", "Ethiopian Airlines", "africa"),
        airline("SQ", "Singapore Airlines", "asia"),
        airline("QF", "Qantas", "australia"),
        airline("EK", "Emirates", "middle east"),
        airline("AC", "Air Canada", "north america"),
        airline("AF", "Air France", "europe"),
        airline("NZ", "Air New Zealand", "new zealand"),
    ]
}

/// Destinations the agents are actively browsing; these routes carry the
/// bulk of the interest traffic.
pub const ASIAN_AIRPORTS: [&str; 19] = [
    "NRT", "ICN", "PEK", "PVG", "SIN", "BKK", "DEL", "MNL", "HKG", "KUL", "CGK", "BOM", "HAN",
    "TPE", "IKA", "KIX", "BLR", "CAN", "CTU",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

/// Agent A lives in Rome, travels July 15-19 on Lufthansa or Singapore
/// Airlines with a 700 budget; agent B lives in Rome, travels July 17-21 on
/// Emirates or Singapore Airlines with an 810 budget. Solutions are planted
/// at SIN, BKK and DEL on the three overlap dates.
pub fn reference_config() -> PuzzleConfig {
    PuzzleConfig {
        agent_a: AgentProfile {
            name: "Agent A".to_string(),
            description: "lives in rome, available july 15-19, prefers lufthansa or \
                          singapore airlines, budget max $700"
                .to_string(),
            origin: "FCO".to_string(),
            available_dates: date_range(date(2025, 7, 15), 5).into_iter().collect(),
            preferred_airlines: ["LH", "SQ"].iter().map(|s| s.to_string()).collect(),
            max_budget: 700.0,
        },
        agent_b: AgentProfile {
            name: "Agent B".to_string(),
            description: "lives in rome, available july 17-21, prefers emirates or \
                          singapore airlines, budget max $810"
                .to_string(),
            origin: "FCO".to_string(),
            available_dates: date_range(date(2025, 7, 17), 5).into_iter().collect(),
            preferred_airlines: ["EK", "SQ"].iter().map(|s| s.to_string()).collect(),
            max_budget: 810.0,
        },
        designated: vec![
            DesignatedMeet {
                airport: "SIN".to_string(),
                date: date(2025, 7, 17),
            },
            DesignatedMeet {
                airport: "BKK".to_string(),
                date: date(2025, 7, 18),
            },
            DesignatedMeet {
                airport: "DEL".to_string(),
                date: date(2025, 7, 19),
            },
        ],
    }
}

/// Default population parameters: Rome to every Asian airport as interest
/// routes, candidate dates spanning the July travel window.
pub fn reference_params() -> PopulationParams {
    let mut interest_routes = BTreeMap::new();
    interest_routes.insert(
        "FCO".to_string(),
        ASIAN_AIRPORTS.iter().map(|s| s.to_string()).collect(),
    );

    let mut params = PopulationParams::new(interest_routes);
    params.interest_dates = date_range(date(2025, 7, 8), 14);
    params.filler_dates = date_range(date(2025, 7, 1), 21);
    params
}

use domain::Company;

/// Static listing reference data: ticker, display name, brand color,
/// logo asset, base price in rupees. Order matters — buy targets rotate
/// through this list.
pub fn nifty_companies() -> Vec<Company> {
    let listings = [
        ("RELIANCE", "Reliance Industries", "#0055a5", "reliance.png", 1400),
        ("TCS", "Tata Consultancy Services", "#5c2d91", "tcs.png", 3200),
        ("HDFCBANK", "HDFC Bank", "#004c8f", "hdfcbank.png", 1600),
        ("INFY", "Infosys", "#007cc3", "infosys.png", 1500),
        ("ICICIBANK", "ICICI Bank", "#f58220", "icicibank.png", 1100),
        ("BHARTIARTL", "Bharti Airtel", "#e40000", "airtel.png", 1700),
        ("SBIN", "State Bank of India", "#22409a", "sbi.png", 800),
        ("ITC", "ITC Limited", "#ffcc00", "itc.png", 450),
        ("LT", "Larsen & Toubro", "#005baa", "lt.png", 3500),
        ("HCLTECH", "HCL Technologies", "#0072bc", "hcltech.png", 1800),
        ("ASIANPAINT", "Asian Paints", "#d71920", "asianpaints.png", 2900),
        ("MARUTI", "Maruti Suzuki", "#1a4f9c", "maruti.png", 12500),
    ];

    listings
        .into_iter()
        .map(|(ticker, name, color, logo, base_price)| Company {
            ticker: ticker.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            logo: logo.to_string(),
            base_price,
        })
        .collect()
}

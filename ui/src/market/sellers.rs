//! Static seller directory.

/// A marketplace seller. Defined at load time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SellerRecord {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// 0.0 – 5.0
    pub rating: f32,
    pub products: &'static [&'static str],
    pub image: &'static str,
    pub verified: bool,
    pub response_time: &'static str,
}

pub static SELLERS: [SellerRecord; 8] = [
    SellerRecord {
        id: 1,
        name: "Green Valley Farms",
        location: "Maharashtra, India",
        rating: 4.8,
        products: &["Organic Tomatoes", "Green Chilies", "Spinach"],
        image: "https://images.unsplash.com/photo-1500937386664-56d1dfef3854?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 1 hour",
    },
    SellerRecord {
        id: 2,
        name: "Sunrise Agri Solutions",
        location: "Punjab, India",
        rating: 4.6,
        products: &["Wheat", "Rice", "Mustard Seeds"],
        image: "https://images.unsplash.com/photo-1625246333195-78d9c38ad449?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 2 hours",
    },
    SellerRecord {
        id: 3,
        name: "Farm Fresh Direct",
        location: "Karnataka, India",
        rating: 4.9,
        products: &["Mangoes", "Bananas", "Papaya"],
        image: "https://images.unsplash.com/photo-1550989460-0adf9ea622e2?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 30 mins",
    },
    SellerRecord {
        id: 4,
        name: "Organic Harvest Co.",
        location: "Tamil Nadu, India",
        rating: 4.7,
        products: &["Turmeric", "Black Pepper", "Cardamom"],
        image: "https://images.unsplash.com/photo-1595855709915-bd98974a31d2?w=400&h=300&fit=crop",
        verified: false,
        response_time: "< 3 hours",
    },
    SellerRecord {
        id: 5,
        name: "Kisan Connect",
        location: "Uttar Pradesh, India",
        rating: 4.5,
        products: &["Potatoes", "Onions", "Garlic"],
        image: "https://images.unsplash.com/photo-1591857177580-dc82b9ac4e1e?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 2 hours",
    },
    SellerRecord {
        id: 6,
        name: "Agro India Trading",
        location: "Gujarat, India",
        rating: 4.4,
        products: &["Groundnut", "Cotton", "Castor"],
        image: "https://images.unsplash.com/photo-1605000797499-95a51c5269ae?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 4 hours",
    },
    SellerRecord {
        id: 7,
        name: "Desi Farms Organic",
        location: "Rajasthan, India",
        rating: 4.8,
        products: &["Moong Beans", "Chickpeas", "Fenugreek"],
        image: "https://images.unsplash.com/photo-1606923829579-0cb981a83e2e?w=400&h=300&fit=crop",
        verified: true,
        response_time: "< 1 hour",
    },
    SellerRecord {
        id: 8,
        name: "Coastal Growers Assoc.",
        location: "Kerala, India",
        rating: 4.6,
        products: &["Black Rice", "Coconut", "Pepper"],
        image: "https://images.unsplash.com/photo-1518133841950-ae0616e6cb30?w=400&h=300&fit=crop",
        verified: false,
        response_time: "< 2 hours",
    },
];

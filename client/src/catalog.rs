//! Placeholder catalog.
//!
//! Hardcoded example records rendered whenever the content provider returns
//! nothing for a section, plus the static records (testimonials, partners,
//! services, hotels, apartments) that are never served by the provider.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use rust_decimal::Decimal;
use time::macros::datetime;

use crate::net::types::{BlogPost, Destination, Faq, TourPackage};

// =============================================================================
// PROVIDER-BACKED PLACEHOLDERS
// =============================================================================

fn destination(id: &str, name: &str, country: &str, tour_count: i32, image: &str, description: &str) -> Destination {
    Destination {
        id: id.to_owned(),
        name: name.to_owned(),
        country: country.to_owned(),
        tour_count,
        image_url: format!("/images/destinations/{image}"),
        description: description.to_owned(),
        featured: true,
        created_at: datetime!(2024-01-15 09:00:00 UTC),
    }
}

#[must_use]
pub fn destinations() -> Vec<Destination> {
    vec![
        destination(
            "placeholder-santorini",
            "Santorini",
            "Greece",
            12,
            "santorini.jpg",
            "Whitewashed villages perched on volcanic cliffs above the Aegean.",
        ),
        destination(
            "placeholder-bali",
            "Bali",
            "Indonesia",
            18,
            "bali.jpg",
            "Rice terraces, temples and surf breaks on the Island of the Gods.",
        ),
        destination(
            "placeholder-kyoto",
            "Kyoto",
            "Japan",
            9,
            "kyoto.jpg",
            "Ancient shrines, tea houses and lantern-lit lanes.",
        ),
        destination(
            "placeholder-machu-picchu",
            "Machu Picchu",
            "Peru",
            7,
            "machu-picchu.jpg",
            "The Inca citadel in the clouds of the Andes.",
        ),
        destination(
            "placeholder-marrakech",
            "Marrakech",
            "Morocco",
            10,
            "marrakech.jpg",
            "Souks, riads and the Atlas mountains on the horizon.",
        ),
        destination(
            "placeholder-reykjavik",
            "Reykjavik",
            "Iceland",
            6,
            "reykjavik.jpg",
            "Northern lights, geysers and glacier lagoons.",
        ),
    ]
}

fn package(
    id: &str,
    destination_id: &str,
    name: &str,
    duration: &str,
    price_cents: i64,
    image: &str,
    description: &str,
) -> TourPackage {
    TourPackage {
        id: id.to_owned(),
        destination_id: Some(destination_id.to_owned()),
        name: name.to_owned(),
        duration: duration.to_owned(),
        price: Decimal::new(price_cents, 2),
        description: description.to_owned(),
        image_url: format!("/images/packages/{image}"),
        featured: true,
        created_at: datetime!(2024-02-01 09:00:00 UTC),
    }
}

#[must_use]
pub fn packages() -> Vec<TourPackage> {
    vec![
        package(
            "placeholder-aegean-escape",
            "placeholder-santorini",
            "Aegean Island Escape",
            "7 Days / 6 Nights",
            189_900,
            "aegean.jpg",
            "Sunset sailing, caldera hikes and a private winery tour.",
        ),
        package(
            "placeholder-bali-retreat",
            "placeholder-bali",
            "Bali Wellness Retreat",
            "10 Days / 9 Nights",
            149_900,
            "bali-retreat.jpg",
            "Ubud yoga mornings, spa afternoons and a Nusa Penida day trip.",
        ),
        package(
            "placeholder-kyoto-culture",
            "placeholder-kyoto",
            "Kyoto Culture Trail",
            "5 Days / 4 Nights",
            129_500,
            "kyoto-trail.jpg",
            "Tea ceremony, Arashiyama bamboo grove and a ryokan stay.",
        ),
        package(
            "placeholder-inca-trail",
            "placeholder-machu-picchu",
            "Classic Inca Trail",
            "8 Days / 7 Nights",
            219_000,
            "inca-trail.jpg",
            "Four days on the trail ending at the Sun Gate at dawn.",
        ),
    ]
}

fn blog(id: &str, title: &str, slug: &str, category: &str, read_time: i32, excerpt: &str, content: &str) -> BlogPost {
    BlogPost {
        id: id.to_owned(),
        title: title.to_owned(),
        slug: slug.to_owned(),
        excerpt: excerpt.to_owned(),
        content: content.to_owned(),
        image_url: format!("/images/blog/{slug}.jpg"),
        read_time,
        category: category.to_owned(),
        published: true,
        created_at: datetime!(2024-03-10 08:00:00 UTC),
    }
}

#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        blog(
            "placeholder-packing",
            "The Carry-On Only Packing List",
            "carry-on-packing-list",
            "Tips",
            6,
            "Everything you need for two weeks abroad in a single bag.",
            "## Start with the bag\n\nPick a 40 litre pack that fits overhead bins.\n\n\
             ## Layers over bulk\n\nThree tops, two bottoms, one warm layer. Wash as you go.",
        ),
        blog(
            "placeholder-shoulder-season",
            "Why Shoulder Season Wins",
            "why-shoulder-season-wins",
            "Planning",
            4,
            "Fewer crowds, lower prices and better light for photos.",
            "Shoulder season sits between peak and off-peak.\n\n\
             - Flights are cheaper\n- Hotels have availability\n- Locals have time to chat",
        ),
        blog(
            "placeholder-street-food",
            "A Beginner's Guide to Street Food",
            "street-food-guide",
            "Food",
            5,
            "How to eat well and safely at markets around the world.",
            "Follow the queue: a busy stall turns food over quickly.\n\n\
             Watch it cooked in front of you, and carry small change.",
        ),
    ]
}

fn faq(id: &str, order: i32, question: &str, answer: &str) -> Faq {
    Faq { id: id.to_owned(), question: question.to_owned(), answer: answer.to_owned(), order, active: true }
}

#[must_use]
pub fn faqs() -> Vec<Faq> {
    vec![
        faq(
            "placeholder-faq-book",
            1,
            "How do I book a tour package?",
            "Pick a package, choose your dates and send us a message through the contact form. \
             A travel advisor confirms availability within one business day.",
        ),
        faq(
            "placeholder-faq-cancel",
            2,
            "What is your cancellation policy?",
            "Cancellations made 30 or more days before departure are fully refunded. \
             Within 30 days a 20% fee applies.",
        ),
        faq(
            "placeholder-faq-custom",
            3,
            "Can you build a custom itinerary?",
            "Yes. Tell us where you want to go and what you enjoy, \
             and we will put together a trip around your dates and budget.",
        ),
        faq(
            "placeholder-faq-insurance",
            4,
            "Is travel insurance included?",
            "Insurance is not included in package prices, \
             but we can recommend partners that cover medical care and trip interruption.",
        ),
        faq(
            "placeholder-faq-payment",
            5,
            "Which payment methods do you accept?",
            "All major credit cards and bank transfers. A 25% deposit secures your booking.",
        ),
    ]
}

/// Placeholder post with `slug`, if one exists.
#[must_use]
pub fn blog_post(slug: &str) -> Option<BlogPost> {
    blog_posts().into_iter().find(|post| post.slug == slug)
}

// =============================================================================
// STATIC DISPLAY RECORDS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar_url: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Amelia Hart",
        role: "Honeymoon, Santorini",
        quote: "Every detail was handled. We just had to show up and watch the sunsets.",
        avatar_url: "/images/avatars/amelia.jpg",
        rating: 5,
    },
    Testimonial {
        name: "Daniel Okafor",
        role: "Family trip, Bali",
        quote: "The kids still talk about the monkey forest. Brilliant guides and easy transfers.",
        avatar_url: "/images/avatars/daniel.jpg",
        rating: 5,
    },
    Testimonial {
        name: "Sofia Marquez",
        role: "Solo traveller, Kyoto",
        quote: "I felt safe and looked after the whole way, and still had plenty of time to explore alone.",
        avatar_url: "/images/avatars/sofia.jpg",
        rating: 4,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub logo_url: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner { name: "SkyWays", logo_url: "/images/partners/skyways.svg" },
    Partner { name: "Harbor Hotels", logo_url: "/images/partners/harbor.svg" },
    Partner { name: "BlueWave Cruises", logo_url: "/images/partners/bluewave.svg" },
    Partner { name: "RailEurope", logo_url: "/images/partners/raileurope.svg" },
    Partner { name: "TrekCo", logo_url: "/images/partners/trekco.svg" },
    Partner { name: "CityPass", logo_url: "/images/partners/citypass.svg" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    /// Glyph shown in the icon slot; `None` renders no icon.
    pub icon: Option<&'static str>,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Flight Booking",
        summary: "Best fares across 400 airlines with flexible change options.",
        icon: Some("✈"),
    },
    Service {
        title: "Hotel Reservations",
        summary: "Hand-picked stays from boutique riads to beach resorts.",
        icon: Some("🏨"),
    },
    Service {
        title: "Guided Tours",
        summary: "Small groups led by licensed local guides.",
        icon: Some("🧭"),
    },
    Service {
        title: "Travel Insurance",
        summary: "Cover for medical care, delays and lost luggage.",
        icon: Some("🛡"),
    },
    Service {
        title: "Visa Assistance",
        summary: "Document checklists and appointment booking.",
        icon: None,
    },
    Service {
        title: "24/7 Support",
        summary: "A real person on the phone wherever you are.",
        icon: Some("☎"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hotel {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub nightly_price: u32,
    /// Rating out of ten, one decimal place, stored as tenths.
    pub rating_tenths: u16,
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

pub const HOTELS: &[Hotel] = &[
    Hotel {
        id: "caldera-suites",
        name: "Caldera Suites",
        city: "Oia, Santorini",
        nightly_price: 420,
        rating_tenths: 94,
        description: "Cave suites carved into the cliff with private plunge pools facing the caldera.",
        amenities: &["Infinity pool", "Breakfast included", "Airport transfer", "Free Wi-Fi"],
        gallery: &["/images/hotels/caldera-1.jpg", "/images/hotels/caldera-2.jpg", "/images/hotels/caldera-3.jpg"],
    },
    Hotel {
        id: "ubud-jungle-lodge",
        name: "Ubud Jungle Lodge",
        city: "Ubud, Bali",
        nightly_price: 180,
        rating_tenths: 91,
        description: "Bamboo villas above the Ayung river, a short walk from the rice terraces.",
        amenities: &["Spa", "Yoga shala", "Restaurant", "Free Wi-Fi"],
        gallery: &["/images/hotels/ubud-1.jpg", "/images/hotels/ubud-2.jpg"],
    },
    Hotel {
        id: "gion-machiya",
        name: "Gion Machiya House",
        city: "Kyoto",
        nightly_price: 260,
        rating_tenths: 89,
        description: "A restored wooden townhouse in the geisha district with a private garden.",
        amenities: &["Private garden", "Tea set", "Bicycle rental"],
        gallery: &["/images/hotels/gion-1.jpg"],
    },
];

/// Static hotel by id.
#[must_use]
pub fn hotel(id: &str) -> Option<&'static Hotel> {
    HOTELS.iter().find(|hotel| hotel.id == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Apartment {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub monthly_rent: u32,
    pub image_url: &'static str,
}

pub const APARTMENTS: &[Apartment] = &[
    Apartment {
        id: "greendoors-park-loft",
        title: "Park View Loft",
        location: "Riverside, Lisbon",
        bedrooms: 2,
        bathrooms: 1,
        monthly_rent: 1_850,
        image_url: "/images/apartments/park-loft.jpg",
    },
    Apartment {
        id: "greendoors-garden-flat",
        title: "Garden Flat",
        location: "Old Town, Porto",
        bedrooms: 1,
        bathrooms: 1,
        monthly_rent: 1_200,
        image_url: "/images/apartments/garden-flat.jpg",
    },
    Apartment {
        id: "greendoors-family-home",
        title: "Family Terrace Home",
        location: "Cascais",
        bedrooms: 3,
        bathrooms: 2,
        monthly_rent: 2_650,
        image_url: "/images/apartments/family-home.jpg",
    },
];

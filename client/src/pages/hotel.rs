//! Hotel detail page backed by the static hotel catalog.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::{self, Hotel};
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::layout::Layout;
use crate::util::format;

#[component]
pub fn HotelPage() -> impl IntoView {
    let params = use_params_map();
    let hotel = Memo::new(move |_| params.read().get("id").and_then(|id| catalog::hotel(&id)));

    view! {
        <Layout>
            {move || match hotel.get() {
                Some(hotel) => view! { <HotelDetails hotel=hotel/> }.into_any(),
                None => {
                    view! {
                        <Hero
                            title="Hotel not found"
                            subtitle="Browse our partner hotels on the services page."
                            compact=true
                            actions=Box::new(|| view! { <a class="btn" href="/services">"See hotels"</a> }.into_any())
                        />
                    }
                        .into_any()
                }
            }}
        </Layout>
    }
}

#[component]
fn HotelDetails(hotel: &'static Hotel) -> impl IntoView {
    let cover = hotel.gallery.first().map(|src| (*src).to_owned());
    let price = format!("{} / night", format::whole_price(hotel.nightly_price));

    view! {
        <Hero title=hotel.name subtitle=hotel.city image_url=cover.unwrap_or_default() compact=true/>
        <section class="section hotel-details">
            <div class="hotel-details__summary">
                <span class="hotel-details__rating">{format::tenths(hotel.rating_tenths)}" / 10"</span>
                <span class="hotel-details__price">{price}</span>
            </div>
            <p class="hotel-details__description">{hotel.description}</p>
            <h3>"Amenities"</h3>
            <ul class="hotel-details__amenities">
                {hotel.amenities.iter().map(|a| view! { <li>{*a}</li> }).collect::<Vec<_>>()}
            </ul>
            <div class="hotel-details__gallery">
                {hotel
                    .gallery
                    .iter()
                    .map(|src| view! { <img src=*src alt=hotel.name loading="lazy"/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <ContactForm title="Request a Booking" destination=hotel.city/>
    }
}

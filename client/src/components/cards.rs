//! Card components for content records.

use leptos::prelude::*;

use crate::catalog::{Apartment, Hotel};
use crate::net::types::{BlogPost, Destination, TourPackage};
use crate::util::format;

#[component]
pub fn DestinationCard(destination: Destination) -> impl IntoView {
    let Destination { id, name, country, tour_count, image_url, description, .. } = destination;
    let tours = if tour_count == 1 { "1 tour".to_owned() } else { format!("{tour_count} tours") };
    let search_href = format!("/search?q={}", name.replace(' ', "+"));

    view! {
        <article class="card destination-card" data-id=id>
            <img class="card__image" src=image_url alt=name.clone() loading="lazy"/>
            <div class="card__body">
                <h3 class="card__title">{name}</h3>
                <p class="card__meta">{country}" · "{tours}</p>
                <p class="card__text">{description}</p>
                <a class="card__link" href=search_href>"Explore tours →"</a>
            </div>
        </article>
    }
}

#[component]
pub fn PackageCard(package: TourPackage) -> impl IntoView {
    let TourPackage { id, name, duration, price, description, image_url, .. } = package;

    view! {
        <article class="card package-card" data-id=id>
            <img class="card__image" src=image_url alt=name.clone() loading="lazy"/>
            <div class="card__body">
                <span class="card__badge">{duration}</span>
                <h3 class="card__title">{name}</h3>
                <p class="card__text">{description}</p>
                <div class="package-card__footer">
                    <span class="package-card__price">
                        <small>"from "</small>
                        {format::price(price)}
                    </span>
                    <a class="btn btn--small" href="/contact">"Book now"</a>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    let BlogPost { title, slug, excerpt, image_url, read_time, category, created_at, .. } = post;
    let href = format!("/blog/{slug}");

    view! {
        <article class="card blog-card">
            <a href=href.clone()>
                <img class="card__image" src=image_url alt=title.clone() loading="lazy"/>
            </a>
            <div class="card__body">
                <p class="card__meta">
                    <span class="card__badge">{category}</span>
                    " "
                    {format::date(created_at)}
                    " · "
                    {format::read_time(read_time)}
                </p>
                <h3 class="card__title">
                    <a href=href.clone()>{title}</a>
                </h3>
                <p class="card__text">{excerpt}</p>
                <a class="card__link" href=href>"Read more →"</a>
            </div>
        </article>
    }
}

#[component]
pub fn HotelCard(hotel: &'static Hotel) -> impl IntoView {
    let href = format!("/hotels/{}", hotel.id);
    let cover = hotel.gallery.first().copied();

    view! {
        <article class="card hotel-card">
            {cover.map(|src| view! { <img class="card__image" src=src alt=hotel.name loading="lazy"/> })}
            <div class="card__body">
                <h3 class="card__title">{hotel.name}</h3>
                <p class="card__meta">{hotel.city}" · "{format::tenths(hotel.rating_tenths)}"/10"</p>
                <p class="card__text">{format::whole_price(hotel.nightly_price)}" / night"</p>
                <a class="card__link" href=href>"View hotel →"</a>
            </div>
        </article>
    }
}

#[component]
pub fn ApartmentCard(apartment: &'static Apartment) -> impl IntoView {
    let beds =
        if apartment.bedrooms == 1 { "1 bedroom".to_owned() } else { format!("{} bedrooms", apartment.bedrooms) };
    let baths =
        if apartment.bathrooms == 1 { "1 bath".to_owned() } else { format!("{} baths", apartment.bathrooms) };

    view! {
        <article class="card apartment-card" data-id=apartment.id>
            <img class="card__image" src=apartment.image_url alt=apartment.title loading="lazy"/>
            <div class="card__body">
                <h3 class="card__title">{apartment.title}</h3>
                <p class="card__meta">{apartment.location}</p>
                <p class="card__text">{beds}" · "{baths}</p>
                <div class="package-card__footer">
                    <span class="package-card__price">{format::whole_price(apartment.monthly_rent)}<small>" / month"</small></span>
                    <a class="btn btn--small" href="/contact">"Enquire"</a>
                </div>
            </div>
        </article>
    }
}

mod image;
mod new;

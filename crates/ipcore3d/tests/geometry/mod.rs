mod animation_filter;
mod barrier_two_tetrahedra;
mod contact_tabular;
mod distance_fd;
mod fd;
mod stable_neo_hookean_fd;

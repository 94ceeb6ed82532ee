fn main() {
    multiversx_sc_meta_lib::cli_main::<omnipool_mock::AbiProvider>();
}

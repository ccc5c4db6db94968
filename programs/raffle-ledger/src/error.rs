use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    #[msg("Signer does not hold the authority required for this instruction")]
    Unauthorized,
    #[msg("Account has already been initialized")]
    AlreadyInitialized,
    #[msg("Account has not been initialized")]
    NotInitialized,
    #[msg("Raffle is not selling tickets at this time")]
    RaffleNotActive,
    #[msg("Not enough tickets left for this purchase")]
    SoldOut,
    #[msg("Buyer token account cannot cover the ticket cost")]
    InsufficientFunds,
    #[msg("Admin key must not be the default pubkey")]
    InvalidAdmin,
    #[msg("Ticket price must be greater than zero")]
    InvalidPrice,
    #[msg("Ticket capacity must be greater than zero")]
    InvalidTicketCapacity,
    #[msg("Sale start must not be after sale end")]
    InvalidSaleWindow,
    #[msg("Sale end timestamp already passed")]
    SaleAlreadyEnded,
    #[msg("Entrants account size does not match the ticket capacity")]
    EntrantsSizeMismatch,
    #[msg("Ticket count must be greater than zero")]
    InvalidTicketCount,
    #[msg("Token account mint does not match the raffle mint")]
    InvalidProceedsMint,
    #[msg("Proceeds account does not belong to this raffle")]
    InvalidEscrow,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Address namespace must be 1 to 32 bytes with at most 14 parents")]
    InvalidNamespace,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Raffle is still running")]
    RaffleStillRunning,
    #[msg("Entrants account must hold enough lamports to be rent exempt")]
    EntrantsNotRentExempt,
    #[msg("Buyer must own the token account the tickets are paid from")]
    BuyerTokenOwnerMismatch,
}
